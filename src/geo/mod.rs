use consts::{EARTH_RADIUS, FEET_PER_METER, METERS_PER_KILOMETER};
use models::LatLng;

pub mod consts;
pub mod models;

/// Great-circle distance in meters between two points, using the haversine formula on a
/// spherical Earth.
pub fn distance(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat * std::f64::consts::PI / 180.0;
    let phi_2 = b.lat * std::f64::consts::PI / 180.0;
    let delta_phi = (b.lat - a.lat) * std::f64::consts::PI / 180.0;
    let delta_lambda = (b.lng - a.lng) * std::f64::consts::PI / 180.0;
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `h` slightly outside of [0, 1] for (near-)antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS * c
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}
