use crate::app_context::{AppContext, RequestContext};
use crate::sessions::services::http::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::sessions::services::requests::CreateSessionRequestBody;
use crate::sessions::services::responses::{
    CreateSessionResponse, SessionResultsResponse, SessionStateResponse,
};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    body: Option<Json<CreateSessionRequestBody>>,
) -> Json<CreateSessionResponse> {
    let scoring = body.and_then(|Json(body)| body.scoring);
    let response = CreateSessionHttpHandler::new(app_context)
        .create(scoring)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn state(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionStateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .state()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn restart(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionStateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .restart()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn results(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResultsResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .results()
        .await;
    Json(response)
}
