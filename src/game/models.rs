use crate::geo::models::LatLng;
use crate::geo::{meters_to_feet, meters_to_km};
use crate::scoring::ScoringPolicyKind;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    NotStarted,
    AwaitingGuess,
    Resolved,
    GameOver,
}

/// What triggered the resolution of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Resolution {
    Confirmed,
    TimedOut,
}

/// Distance between the guess and the truth. A missing guess is kept apart from a guess
/// placed exactly on the truth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance {
    Meters(f64),
    NoGuess,
}

impl Distance {
    pub fn meters(&self) -> Option<f64> {
        match self {
            Self::Meters(meters) => Some(*meters),
            Self::NoGuess => None,
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Meters(meters) => {
                let mut state = serializer.serialize_struct("Distance", 3)?;
                state.serialize_field("meters", meters)?;
                state.serialize_field("km", &meters_to_km(*meters))?;
                state.serialize_field("feet", &meters_to_feet(*meters))?;
                state.end()
            }
            Self::NoGuess => serializer.serialize_none(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round_index: usize,
    pub round_id: usize,
    pub location_name: String,
    pub truth: LatLng,
    pub guess: Option<LatLng>,
    pub distance: Distance,
    pub score: f64,
    /// The guess earned the maximum score of the policy.
    pub perfect: bool,
    pub resolution: Resolution,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub round_index: usize,
    /// 1-based, for display.
    pub round_number: usize,
    pub total_rounds: usize,
    pub cumulative_score: f64,
    pub scoring: ScoringPolicyKind,
    pub guess: Option<LatLng>,
    pub current_round: Option<CurrentRound>,
    pub last_result: Option<RoundResult>,
}

/// The round being played, as shown next to the session state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRound {
    pub id: usize,
    pub asset_key: String,
}
