use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{health, http::cors, http::middleware, sessions};
use axum::{
    routing::{any, get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let rounds_routes = Router::new().route("/", get(sessions::handlers::rounds::list));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::session::create))
        .route("/:session-id", get(sessions::handlers::session::state))
        .route(
            "/:session-id/restart",
            post(sessions::handlers::session::restart),
        )
        .route(
            "/:session-id/results",
            get(sessions::handlers::session::results),
        )
        .route(
            "/:session-id/guess",
            post(sessions::handlers::player_actions::register_guess),
        )
        .route(
            "/:session-id/resolve",
            post(sessions::handlers::player_actions::resolve_round),
        )
        .route(
            "/:session-id/advance",
            post(sessions::handlers::player_actions::advance),
        )
        .route("/:session-id/ws", any(sessions::handlers::ws::ws));

    Router::new()
        .nest("/health", health_routes)
        .nest("/rounds", rounds_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
