pub const EXPONENTIAL_MAX_SCORE: f64 = 5000.0;
pub const EXPONENTIAL_DECAY_PER_KM: f64 = 0.3;

/// `(upper bound in feet, score)`, checked in order; every upper bound is inclusive.
pub const DISTANCE_TIERS_FEET: [(f64, f64); 6] = [
    (20.0, 2.0),
    (100.0, 1.5),
    (200.0, 1.0),
    (500.0, 0.75),
    (1000.0, 0.5),
    (2000.0, 0.25),
];
pub const TIERED_MAX_SCORE: f64 = 2.0;
