use crate::app_context;
use crate::cli::Args;
use crate::cli::tests::fake_args;
use crate::game::tests::fake_rounds;
use crate::http::router;
use axum_test::TestServer;
use http::HeaderValue;
use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};

pub fn test_server() -> TestServer {
    test_server_with(fake_args())
}

pub fn test_server_with(args: Args) -> TestServer {
    let app_context = app_context::init(&args, fake_rounds());
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}

#[tokio::test]
async fn listed_origin_is_allowed() {
    let server = test_server();

    let response = server
        .get("/health/check")
        .add_header(ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;

    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:3000"))
    );
}

#[tokio::test]
async fn unlisted_origin_is_not_allowed() {
    let server = test_server();

    let response = server
        .get("/health/check")
        .add_header(ORIGIN, HeaderValue::from_static("http://elsewhere.example"))
        .await;

    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn wildcard_origin_allows_any_origin() {
    let mut args = fake_args();
    args.allowed_origins = vec![String::from("*"), String::from("http://localhost:3000")];
    let server = test_server_with(args);

    let response = server
        .get("/health/check")
        .add_header(ORIGIN, HeaderValue::from_static("http://elsewhere.example"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("*"))
    );
}
