use crate::app_context::AppContext;
use crate::sessions::services::http::RoundsHttpHandler;
use crate::sessions::services::responses::RoundsResponse;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn list(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<RoundsResponse> {
    Json(RoundsHttpHandler::new(app_context).rounds())
}
