use crate::game::errors::GameErrorCode;
use crate::game::models::{GameSnapshot, RoundResult};
use crate::rounds::models::Round;
use crate::storage::errors::SessionError;
use serde::Serialize;

/// All possible reasons why an operation on a session may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionErrorCode {
    SessionNotFound,
    InvalidCoordinate,
    InvalidStateTransition,
    AlreadyResolved,
}

impl From<SessionError> for SessionErrorCode {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::SessionNotFound => Self::SessionNotFound,
            SessionError::Game(game_error) => match game_error.code() {
                GameErrorCode::InvalidCoordinate => Self::InvalidCoordinate,
                GameErrorCode::InvalidStateTransition => Self::InvalidStateTransition,
                GameErrorCode::AlreadyResolved => Self::AlreadyResolved,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub error: bool,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameSnapshot>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameSnapshot>,
}

impl From<Result<GameSnapshot, SessionError>> for SessionStateResponse {
    fn from(outcome: Result<GameSnapshot, SessionError>) -> Self {
        match outcome {
            Ok(state) => Self {
                error: false,
                error_code: None,
                state: Some(state),
            },
            Err(error) => Self {
                error: true,
                error_code: Some(error.into()),
                state: None,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_score: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResultsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RoundResult>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundsResponse {
    pub rounds: Vec<Round>,
}
