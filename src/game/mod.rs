use crate::geo::{self, models::LatLng};
use crate::rounds::models::Round;
use crate::scoring::ScoringPolicy;
use errors::{GameError, GameOperation};
use models::{CurrentRound, Distance, GamePhase, GameSnapshot, Resolution, RoundResult};
use std::sync::Arc;

pub mod errors;
pub mod models;
#[cfg(test)]
pub mod tests;

/// One player's game: a synchronous state machine over an ordered, read-only list of rounds.
///
/// The session never owns a clock. Whoever drives it (a countdown, an explicit confirmation
/// from the player) calls [`GameSession::resolve_round`]; invalid calls are rejected without
/// touching the session.
#[derive(Debug)]
pub struct GameSession {
    rounds: Arc<[Round]>,
    policy: Box<dyn ScoringPolicy>,
    phase: GamePhase,
    round_index: usize,
    cumulative_score: f64,
    guess: Option<LatLng>,
    results: Vec<RoundResult>,
}

impl GameSession {
    pub fn new(rounds: Arc<[Round]>, policy: Box<dyn ScoringPolicy>) -> Self {
        Self {
            rounds,
            policy,
            phase: GamePhase::NotStarted,
            round_index: 0,
            cumulative_score: 0.0,
            guess: None,
            results: Vec::new(),
        }
    }

    /// Starts a new game from the first round, discarding any progress. Allowed in any phase.
    pub fn start_game(&mut self) {
        self.round_index = 0;
        self.cumulative_score = 0.0;
        self.guess = None;
        self.results.clear();
        self.phase = if self.rounds.is_empty() {
            GamePhase::GameOver
        } else {
            GamePhase::AwaitingGuess
        };
    }

    /// Replaces the guess of the active round.
    pub fn register_guess(&mut self, guess: LatLng) -> Result<(), GameError> {
        self.ensure_phase(GameOperation::RegisterGuess, GamePhase::AwaitingGuess)?;
        if !guess.is_valid() {
            return Err(GameError::InvalidCoordinate {
                lat: guess.lat,
                lng: guess.lng,
            });
        }
        self.guess = Some(guess);
        Ok(())
    }

    pub fn resolve_round(&mut self, resolution: Resolution) -> Result<RoundResult, GameError> {
        if self.phase == GamePhase::Resolved {
            return Err(GameError::AlreadyResolved);
        }
        self.ensure_phase(GameOperation::ResolveRound, GamePhase::AwaitingGuess)?;
        let round = &self.rounds[self.round_index];
        let (distance, score) = match self.guess {
            Some(guess) => {
                let meters = geo::distance(guess, round.truth);
                (Distance::Meters(meters), self.policy.score(meters))
            }
            None => (Distance::NoGuess, 0.0),
        };
        let result = RoundResult {
            round_index: self.round_index,
            round_id: round.id,
            location_name: round.location_name.clone(),
            truth: round.truth,
            guess: self.guess,
            distance,
            score,
            perfect: self.guess.is_some() && score >= self.policy.max_score(),
            resolution,
        };
        self.cumulative_score += score;
        self.results.push(result.clone());
        self.phase = GamePhase::Resolved;
        Ok(result)
    }

    /// Moves on to the next round, or ends the game after the last one.
    pub fn advance(&mut self) -> Result<GamePhase, GameError> {
        self.ensure_phase(GameOperation::Advance, GamePhase::Resolved)?;
        if self.round_index + 1 < self.rounds.len() {
            self.round_index += 1;
            self.guess = None;
            self.phase = GamePhase::AwaitingGuess;
        } else {
            self.phase = GamePhase::GameOver;
        }
        Ok(self.phase)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let current_round = match self.phase {
            GamePhase::AwaitingGuess | GamePhase::Resolved => {
                self.rounds.get(self.round_index).map(|round| CurrentRound {
                    id: round.id,
                    asset_key: round.asset_key.clone(),
                })
            }
            GamePhase::NotStarted | GamePhase::GameOver => None,
        };
        GameSnapshot {
            phase: self.phase,
            round_index: self.round_index,
            round_number: self.round_index + 1,
            total_rounds: self.rounds.len(),
            cumulative_score: self.cumulative_score,
            scoring: self.policy.kind(),
            guess: self.guess,
            current_round,
            last_result: self.results.last().cloned(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn cumulative_score(&self) -> f64 {
        self.cumulative_score
    }

    /// Results of every round resolved since the game was last started, in order.
    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    fn ensure_phase(&self, operation: GameOperation, expected: GamePhase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::InvalidStateTransition {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }
}
