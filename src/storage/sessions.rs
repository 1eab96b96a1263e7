use crate::countdown::{Countdown, CountdownListener};
use crate::game::models::{GamePhase, GameSnapshot, Resolution, RoundResult};
use crate::game::GameSession;
use crate::geo::models::LatLng;
use crate::rounds::models::Round;
use crate::scoring::ScoringPolicyKind;
use crate::sessions::message_types::ServerSentSocketMessage;
use crate::storage::consts::SESSION_ID_LENGTH;
use crate::storage::errors::SessionError;
use crate::storage::interface::{
    ISessionStorage, SessionGameFlowHandler, SessionRepo, SessionSocketsRepo,
};
use crate::storage::sockets::HashMapClientSocketsStorage;
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Sessions = Arc<RwLock<HashMap<String, SessionEntry>>>;

#[derive(Debug)]
pub(super) struct SessionEntry {
    game: GameSession,
    socket_ids: Vec<usize>,
    /// Countdown of the round being played, if any. Replacing it cancels the previous one.
    pub(super) countdown: Option<Countdown>,
}

// TODO: evict sessions that have been over (or idle) for a while, they are kept forever now.
#[derive(Clone)]
pub struct HashMapSessionsStorage {
    pub(super) storage: Sessions,
    rounds: Arc<[Round]>,
    round_duration_secs: u64,
}

impl HashMapSessionsStorage {
    pub fn new(rounds: Arc<[Round]>, round_duration_secs: u64) -> Self {
        Self {
            storage: Arc::default(),
            rounds,
            round_duration_secs,
        }
    }

    fn start_countdown(
        &self,
        entry: &mut SessionEntry,
        session_id: &str,
        client_sockets: HashMapClientSocketsStorage,
    ) {
        if entry.game.phase() != GamePhase::AwaitingGuess {
            entry.countdown = None;
            return;
        }
        let listener = SessionCountdownListener {
            sessions: self.storage.clone(),
            client_sockets,
            session_id: session_id.to_string(),
            round_index: entry.game.round_index(),
        };
        entry.countdown = Some(Countdown::start(self.round_duration_secs, listener));
    }
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn exists(&self, session_id: &str) -> bool {
        self.storage.read().await.contains_key(session_id)
    }

    async fn create(&self, scoring: ScoringPolicyKind) -> String {
        let session_id = generate_session_id();
        let entry = SessionEntry {
            game: GameSession::new(self.rounds.clone(), scoring.policy()),
            socket_ids: vec![],
            countdown: None,
        };
        self.storage.write().await.insert(session_id.clone(), entry);
        session_id
    }

    async fn snapshot(&self, session_id: &str) -> Result<GameSnapshot, SessionError> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(|entry| entry.game.snapshot())
            .ok_or(SessionError::SessionNotFound)
    }

    async fn results(&self, session_id: &str) -> Result<Vec<RoundResult>, SessionError> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(|entry| entry.game.results().to_vec())
            .ok_or(SessionError::SessionNotFound)
    }

    fn rounds(&self) -> Arc<[Round]> {
        self.rounds.clone()
    }
}

impl SessionGameFlowHandler for HashMapSessionsStorage {
    async fn start_game(
        &self,
        session_id: &str,
        client_sockets: HashMapClientSocketsStorage,
    ) -> Result<GameSnapshot, SessionError> {
        let mut storage_guard = self.storage.write().await;
        let entry = storage_guard
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)?;
        entry.game.start_game();
        self.start_countdown(entry, session_id, client_sockets);
        Ok(entry.game.snapshot())
    }

    async fn register_guess(
        &self,
        session_id: &str,
        guess: LatLng,
    ) -> Result<GameSnapshot, SessionError> {
        let mut storage_guard = self.storage.write().await;
        let entry = storage_guard
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)?;
        entry.game.register_guess(guess)?;
        Ok(entry.game.snapshot())
    }

    async fn resolve_round(
        &self,
        session_id: &str,
        resolution: Resolution,
    ) -> Result<(RoundResult, f64), SessionError> {
        let mut storage_guard = self.storage.write().await;
        let entry = storage_guard
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)?;
        let result = entry.game.resolve_round(resolution)?;
        entry.countdown = None;
        Ok((result, entry.game.cumulative_score()))
    }

    async fn advance(
        &self,
        session_id: &str,
        client_sockets: HashMapClientSocketsStorage,
    ) -> Result<GameSnapshot, SessionError> {
        let mut storage_guard = self.storage.write().await;
        let entry = storage_guard
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)?;
        entry.game.advance()?;
        self.start_countdown(entry, session_id, client_sockets);
        Ok(entry.game.snapshot())
    }
}

impl SessionSocketsRepo for HashMapSessionsStorage {
    async fn attach_socket(&self, session_id: &str, socket_id: usize) -> Result<(), SessionError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)?
            .socket_ids
            .push(socket_id);
        Ok(())
    }

    async fn detach_socket(&self, session_id: &str, socket_id: usize) {
        if let Some(entry) = self.storage.write().await.get_mut(session_id) {
            entry.socket_ids.retain(|id| *id != socket_id);
        }
    }

    async fn socket_ids(&self, session_id: &str) -> Vec<usize> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(|entry| entry.socket_ids.clone())
            .unwrap_or_default()
    }
}

/// Pushes ticks to the sockets of a session and resolves its round once time is up.
struct SessionCountdownListener {
    sessions: Sessions,
    client_sockets: HashMapClientSocketsStorage,
    session_id: String,
    round_index: usize,
}

impl SessionCountdownListener {
    async fn socket_ids(&self) -> Vec<usize> {
        self.sessions
            .read()
            .await
            .get(&self.session_id)
            .map(|entry| entry.socket_ids.clone())
            .unwrap_or_default()
    }
}

impl CountdownListener for SessionCountdownListener {
    async fn on_tick(&self, seconds_left: u64) {
        let socket_ids = self.socket_ids().await;
        self.client_sockets
            .broadcast_event(&ServerSentSocketMessage::Tick(seconds_left), &socket_ids)
            .await;
    }

    async fn on_expired(&self) {
        let (result, cumulative_score, socket_ids, _expired_countdown) = {
            let mut storage_guard = self.sessions.write().await;
            let Some(entry) = storage_guard.get_mut(&self.session_id) else {
                return;
            };
            // The player may have moved on while this countdown was waiting for the lock.
            if entry.game.round_index() != self.round_index {
                return;
            }
            match entry.game.resolve_round(Resolution::TimedOut) {
                // The countdown runs this very task, it is dropped only once the broadcast
                // below is done.
                Ok(result) => (
                    result,
                    entry.game.cumulative_score(),
                    entry.socket_ids.clone(),
                    entry.countdown.take(),
                ),
                Err(error) => {
                    tracing::debug!(
                        task = "countdown",
                        session_id = %self.session_id,
                        "Countdown expired but the round can't be resolved: {error}",
                    );
                    return;
                }
            }
        };
        tracing::info!(
            task = "round_resolved",
            session_id = %self.session_id,
            round_index = result.round_index,
            resolution = "timedOut",
            distance_meters = ?result.distance.meters(),
            score = result.score,
            cumulative_score,
        );
        self.client_sockets
            .broadcast_event(&ServerSentSocketMessage::RoundResolved(result), &socket_ids)
            .await;
    }
}

fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}
