use crate::game::models::{GameSnapshot, Resolution, RoundResult};
use crate::geo::models::LatLng;
use crate::rounds::models::Round;
use crate::scoring::ScoringPolicyKind;
use crate::storage::errors::SessionError;
use crate::storage::sockets::HashMapClientSocketsStorage;
use std::sync::Arc;

pub trait ISessionStorage:
    SessionRepo + SessionGameFlowHandler + SessionSocketsRepo + Clone + Send + Sync
{
}

pub trait SessionRepo {
    async fn exists(&self, session_id: &str) -> bool;

    async fn create(&self, scoring: ScoringPolicyKind) -> String;

    async fn snapshot(&self, session_id: &str) -> Result<GameSnapshot, SessionError>;

    async fn results(&self, session_id: &str) -> Result<Vec<RoundResult>, SessionError>;

    fn rounds(&self) -> Arc<[Round]>;
}

pub trait SessionGameFlowHandler {
    /// (Re)starts the game of the session and its countdown.
    async fn start_game(
        &self,
        session_id: &str,
        client_sockets: HashMapClientSocketsStorage,
    ) -> Result<GameSnapshot, SessionError>;

    async fn register_guess(
        &self,
        session_id: &str,
        guess: LatLng,
    ) -> Result<GameSnapshot, SessionError>;

    /// Resolves the active round. Returns its result together with the running total read
    /// under the same lock.
    async fn resolve_round(
        &self,
        session_id: &str,
        resolution: Resolution,
    ) -> Result<(RoundResult, f64), SessionError>;

    /// Moves to the next round and restarts the countdown, or ends the game.
    async fn advance(
        &self,
        session_id: &str,
        client_sockets: HashMapClientSocketsStorage,
    ) -> Result<GameSnapshot, SessionError>;
}

pub trait SessionSocketsRepo {
    async fn attach_socket(&self, session_id: &str, socket_id: usize) -> Result<(), SessionError>;

    async fn detach_socket(&self, session_id: &str, socket_id: usize);

    async fn socket_ids(&self, session_id: &str) -> Vec<usize>;
}
