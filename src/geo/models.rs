use crate::game::errors::GameError;
use serde::{Deserialize, Serialize};

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GameError> {
        let coordinate = LatLng { lat, lng };
        if !coordinate.is_valid() {
            return Err(GameError::InvalidCoordinate { lat, lng });
        }
        Ok(coordinate)
    }

    /// Whether the point lies on the globe: latitude within ±90° and longitude within ±180°.
    /// `NaN` and infinities are never valid.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
            && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.lng)
    }
}
