use crate::geo::{meters_to_feet, meters_to_km};
use clap::ValueEnum;
use consts::{
    DISTANCE_TIERS_FEET, EXPONENTIAL_DECAY_PER_KM, EXPONENTIAL_MAX_SCORE, TIERED_MAX_SCORE,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod consts;
#[cfg(test)]
pub mod tests;

/// Turns the distance between a guess and the truth into points.
pub trait ScoringPolicy: Debug + Send + Sync {
    fn score(&self, distance_meters: f64) -> f64;

    fn max_score(&self) -> f64;

    fn kind(&self) -> ScoringPolicyKind;
}

/// `round(5000 · e^(-0.3 · km))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExponentialDecay;

impl ScoringPolicy for ExponentialDecay {
    fn score(&self, distance_meters: f64) -> f64 {
        let distance_km = meters_to_km(distance_meters.max(0.0));
        (EXPONENTIAL_MAX_SCORE * (-EXPONENTIAL_DECAY_PER_KM * distance_km).exp()).round()
    }

    fn max_score(&self) -> f64 {
        EXPONENTIAL_MAX_SCORE
    }

    fn kind(&self) -> ScoringPolicyKind {
        ScoringPolicyKind::Exponential
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TieredThreshold;

impl TieredThreshold {
    pub fn score_feet(&self, distance_feet: f64) -> f64 {
        DISTANCE_TIERS_FEET
            .iter()
            .find(|(upper_bound, _)| distance_feet <= *upper_bound)
            .map_or(0.0, |(_, score)| *score)
    }
}

impl ScoringPolicy for TieredThreshold {
    fn score(&self, distance_meters: f64) -> f64 {
        self.score_feet(meters_to_feet(distance_meters))
    }

    fn max_score(&self) -> f64 {
        TIERED_MAX_SCORE
    }

    fn kind(&self) -> ScoringPolicyKind {
        ScoringPolicyKind::Tiered
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ScoringPolicyKind {
    #[default]
    Exponential,
    Tiered,
}

impl ScoringPolicyKind {
    pub fn policy(self) -> Box<dyn ScoringPolicy> {
        match self {
            Self::Exponential => Box::new(ExponentialDecay),
            Self::Tiered => Box::new(TieredThreshold),
        }
    }
}
