use crate::app_context::{AppContext, RequestContext};
use crate::game::models::{GamePhase, GameSnapshot, Resolution};
use crate::geo::models::LatLng;
use crate::scoring::ScoringPolicyKind;
use crate::sessions::message_types::{GameOverPayload, ServerSentSocketMessage};
use crate::sessions::services::responses::{
    CreateSessionResponse, ResolveRoundResponse, RoundsResponse, SessionResultsResponse,
    SessionStateResponse,
};
use crate::storage::interface::ISessionStorage;

pub struct SessionHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> SessionHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn state(&self) -> SessionStateResponse {
        self.app_context
            .sessions
            .snapshot(&self.request_context.session_id)
            .await
            .into()
    }

    pub async fn restart(&self) -> SessionStateResponse {
        let outcome = self
            .app_context
            .sessions
            .start_game(
                &self.request_context.session_id,
                self.app_context.sockets.clone(),
            )
            .await;
        if let Ok(snapshot) = &outcome {
            tracing::info!(
                task = "game_started",
                session_id = %self.request_context.session_id,
                total_rounds = snapshot.total_rounds,
            );
            self.broadcast_round_transition(snapshot).await;
        }
        outcome.into()
    }

    pub async fn register_guess(&self, guess: LatLng) -> SessionStateResponse {
        self.app_context
            .sessions
            .register_guess(&self.request_context.session_id, guess)
            .await
            .into()
    }

    /// Explicit confirmation of the current guess by the player.
    pub async fn resolve_round(&self) -> ResolveRoundResponse {
        let (result, cumulative_score) = match self
            .app_context
            .sessions
            .resolve_round(&self.request_context.session_id, Resolution::Confirmed)
            .await
        {
            Ok(resolved) => resolved,
            Err(error) => {
                return ResolveRoundResponse {
                    error: true,
                    error_code: Some(error.into()),
                    result: None,
                    cumulative_score: None,
                }
            }
        };
        tracing::info!(
            task = "round_resolved",
            session_id = %self.request_context.session_id,
            round_index = result.round_index,
            resolution = "confirmed",
            distance_meters = ?result.distance.meters(),
            score = result.score,
            cumulative_score,
        );
        let socket_ids = self
            .app_context
            .sessions
            .socket_ids(&self.request_context.session_id)
            .await;
        self.app_context
            .sockets
            .broadcast_event(
                &ServerSentSocketMessage::RoundResolved(result.clone()),
                &socket_ids,
            )
            .await;
        ResolveRoundResponse {
            error: false,
            error_code: None,
            result: Some(result),
            cumulative_score: Some(cumulative_score),
        }
    }

    pub async fn advance(&self) -> SessionStateResponse {
        let outcome = self
            .app_context
            .sessions
            .advance(
                &self.request_context.session_id,
                self.app_context.sockets.clone(),
            )
            .await;
        if let Ok(snapshot) = &outcome {
            self.broadcast_round_transition(snapshot).await;
        }
        outcome.into()
    }

    pub async fn results(&self) -> SessionResultsResponse {
        match self
            .app_context
            .sessions
            .results(&self.request_context.session_id)
            .await
        {
            Ok(results) => SessionResultsResponse {
                error: false,
                error_code: None,
                results: Some(results),
            },
            Err(error) => SessionResultsResponse {
                error: true,
                error_code: Some(error.into()),
                results: None,
            },
        }
    }

    async fn broadcast_round_transition(&self, snapshot: &GameSnapshot) {
        let event = match snapshot.phase {
            GamePhase::GameOver => {
                tracing::info!(
                    task = "game_over",
                    session_id = %self.request_context.session_id,
                    final_score = snapshot.cumulative_score,
                );
                ServerSentSocketMessage::GameOver(GameOverPayload {
                    final_score: snapshot.cumulative_score,
                    total_rounds: snapshot.total_rounds,
                })
            }
            _ => ServerSentSocketMessage::RoundStarted(snapshot.clone()),
        };
        let socket_ids = self
            .app_context
            .sessions
            .socket_ids(&self.request_context.session_id)
            .await;
        self.app_context
            .sockets
            .broadcast_event(&event, &socket_ids)
            .await;
    }
}

pub struct CreateSessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateSessionHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    /// Creates a session and starts its first round right away.
    pub async fn create(&self, scoring: Option<ScoringPolicyKind>) -> CreateSessionResponse {
        let scoring = scoring.unwrap_or(self.app_context.default_scoring);
        let session_id = self.app_context.sessions.create(scoring).await;
        let request_context = RequestContext { session_id };
        let state = SessionHttpHandler::new(self.app_context.clone(), &request_context)
            .restart()
            .await
            .state;
        CreateSessionResponse {
            error: state.is_none(),
            session_id: request_context.session_id,
            state,
        }
    }
}

pub struct RoundsHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> RoundsHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub fn rounds(&self) -> RoundsResponse {
        RoundsResponse {
            rounds: self.app_context.sessions.rounds().to_vec(),
        }
    }
}
