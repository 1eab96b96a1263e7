use crate::app_context::AppContext;
use crate::sessions::services::responses::{SessionErrorCode, SessionStateResponse};
use crate::sessions::services::ws::SessionWsHandler;
use crate::storage::interface::SessionRepo;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

pub async fn ws(
    websocket: WebSocketUpgrade,
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Response {
    if !app_context.sessions.exists(&session_id).await {
        let response = SessionStateResponse {
            error: true,
            error_code: Some(SessionErrorCode::SessionNotFound),
            state: None,
        };
        return (StatusCode::NOT_FOUND, Json(response)).into_response();
    }
    websocket.on_upgrade(move |socket| async move {
        SessionWsHandler::new(app_context, session_id, socket)
            .await
            .on_client_connected()
            .await
    })
}
