use crate::app_context::{AppContext, RequestContext};
use crate::geo::models::LatLng;
use crate::sessions::services::http::SessionHttpHandler;
use crate::sessions::services::responses::{ResolveRoundResponse, SessionStateResponse};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn register_guess(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(guess): Json<LatLng>,
) -> Json<SessionStateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .register_guess(guess)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn resolve_round(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<ResolveRoundResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .resolve_round()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn advance(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionStateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .advance()
        .await;
    Json(response)
}
