pub const EARTH_RADIUS: f64 = 6371e3;
pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const FEET_PER_METER: f64 = 3.28084;
