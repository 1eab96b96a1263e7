use crate::game::errors::GameError;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SessionError {
    #[error("no session with such id")]
    SessionNotFound,
    #[error(transparent)]
    Game(#[from] GameError),
}
