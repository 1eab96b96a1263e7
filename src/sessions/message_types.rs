use crate::game::models::{GameSnapshot, RoundResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientSentSocketMessage {
    Ping,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ServerSentSocketMessage {
    /// Sent once right after the socket is connected.
    SessionState(GameSnapshot),
    RoundStarted(GameSnapshot),
    /// Seconds left in the current round.
    Tick(u64),
    RoundResolved(RoundResult),
    GameOver(GameOverPayload),
    Pong,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOverPayload {
    pub final_score: f64,
    pub total_rounds: usize,
}
