use crate::cli::Args;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

const ANY_ORIGIN: &str = "*";

pub fn layer(args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&args.allowed_origins))
        .allow_headers([
            http::header::USER_AGENT,
            http::header::REFERER,
            http::header::ORIGIN,
            http::header::ACCESS_CONTROL_REQUEST_METHOD,
            http::header::ACCESS_CONTROL_REQUEST_HEADERS,
            http::header::CONTENT_TYPE,
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// A `*` entry allows every origin, the other entries are matched exactly.
fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin.trim() == ANY_ORIGIN) {
        if origins.len() > 1 {
            tracing::warn!("Allowed origins contain `*`, the other entries are redundant.");
        }
        return AllowOrigin::any();
    }
    let origins = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring malformed allowed origin {origin:?}.");
                None
            }
        })
        .collect::<Vec<_>>();
    AllowOrigin::list(origins)
}
