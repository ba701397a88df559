//! Common test helpers for integration tests.
//!
//! Every helper builds a fresh store, so tests never observe each other's
//! writes.
//!
//! # Note
//!
//! `#![allow(dead_code)]` is needed because each integration test file is
//! compiled as its own crate and uses only part of this module.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use shows_api::api::{AppState, create_router};
use shows_api::domain::{Show, ShowId};
use shows_api::infrastructure::InMemoryShowRepository;

// =============================================================================
// App Creation Helpers
// =============================================================================

/// Creates a router over an empty store.
pub fn create_empty_app() -> Router {
    create_router(AppState::new(InMemoryShowRepository::new()))
}

/// Creates a router over a store holding `shows`, returning the store too so
/// tests can inspect it directly.
pub fn create_app_with(shows: Vec<Show>) -> (Router, InMemoryShowRepository) {
    let repository = InMemoryShowRepository::with_shows(shows);
    let router = create_router(AppState::new(repository.clone()));
    (router, repository)
}

/// Creates a router over a store holding a single show,
/// `{id: 1, name: "Friends", episodes_seen: 50}`.
pub fn create_friends_app() -> (Router, InMemoryShowRepository) {
    create_app_with(vec![Show::new(ShowId::new(1), "Friends", 50)])
}

// =============================================================================
// Request Helpers
// =============================================================================

/// A decoded response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Sends a request without a body.
pub async fn send(app: &Router, method: &str, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    dispatch(app, request).await
}

/// Sends a request with a JSON body.
pub async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> TestResponse {
    send_raw(app, method, uri, &body.to_string()).await
}

/// Sends a request with an arbitrary body labelled as JSON.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("Body is not JSON");

    TestResponse { status, body }
}

// =============================================================================
// Assertion Helpers
// =============================================================================

/// Asserts that `body` is a well-formed envelope consistent with `status`.
pub fn assert_envelope(response: &TestResponse) {
    let body = &response.body;
    let object = body.as_object().expect("Envelope is not an object");

    assert_eq!(object.len(), 4, "Unexpected envelope keys: {body}");
    assert_eq!(body["code"], response.status.as_u16());
    assert_eq!(body["success"], response.status.is_success());
    assert!(body["message"].is_string());
    assert!(body["result"].is_null() || body["result"].is_object());
}
