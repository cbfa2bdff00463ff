// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use blog_api::application::{ports::time::Clock, services::ApplicationServices};
use blog_api::domain::article::ArticleRepository;
use blog_api::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn build_services(
    repo: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
) -> ApplicationServices {
    ApplicationServices::new(repo, clock)
}

pub fn build_test_state(repo: Arc<dyn ArticleRepository>) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(mocks::SteppingClock::default());
    HttpState {
        services: Arc::new(build_services(repo, clock)),
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(mocks::InMemoryArticleRepo::new()))
}

/// Build a test router around a caller-supplied repository.
pub fn make_test_router_with_repo(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    build_router(build_test_state(repo), &[])
}

/// Send a request (optionally with a JSON body) and return the status and parsed body.
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an error envelope with the expected status and code.
pub fn assert_error_body(status: StatusCode, json: &Value, expected_status: StatusCode, expected_code: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let code = json.pointer("/error/code").and_then(Value::as_str).unwrap_or("");
    let message = json.pointer("/error/message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(code, expected_code, "unexpected error code: {code}");
    assert!(!message.is_empty(), "expected non-empty error message");
}
