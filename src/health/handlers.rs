use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::storage::interface::SessionRepo;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn healthcheck(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<HealthCheckResponse> {
    let rounds_loaded = app_context.sessions.rounds().len();
    Json(HealthCheckResponse {
        error: rounds_loaded == 0,
        rounds_loaded,
    })
}
