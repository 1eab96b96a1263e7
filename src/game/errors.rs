use crate::game::models::GamePhase;
use serde::Serialize;
use thiserror::Error;

/// Conditions signalled by the game state machine. None of them is fatal and none of them
/// leaves the session in a modified state.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GameError {
    #[error("coordinate ({lat}, {lng}) is outside of the globe")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("`{operation}` is not allowed while the game is {phase:?}")]
    InvalidStateTransition {
        operation: GameOperation,
        phase: GamePhase,
    },
    #[error("the round has already been resolved")]
    AlreadyResolved,
}

impl GameError {
    pub fn code(&self) -> GameErrorCode {
        match self {
            Self::InvalidCoordinate { .. } => GameErrorCode::InvalidCoordinate,
            Self::InvalidStateTransition { .. } => GameErrorCode::InvalidStateTransition,
            Self::AlreadyResolved => GameErrorCode::AlreadyResolved,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOperation {
    RegisterGuess,
    ResolveRound,
    Advance,
}

impl std::fmt::Display for GameOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RegisterGuess => "register_guess",
            Self::ResolveRound => "resolve_round",
            Self::Advance => "advance",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameErrorCode {
    InvalidCoordinate,
    InvalidStateTransition,
    AlreadyResolved,
}
