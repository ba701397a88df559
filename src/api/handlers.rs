//! HTTP handlers that do not touch the show store, plus the shared
//! application state.

use std::sync::Arc;

use axum::extract::{Path, rejection::PathRejection};

use super::envelope::{Envelope, HealthStatus, Payload};
use super::error::ApiError;
use crate::infrastructure::ShowRepository;

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
///
/// The show repository is held behind a trait object so the router does not
/// care which store backs it. Each `AppState` owns its store; tests build a
/// fresh one per case.
#[derive(Clone)]
pub struct AppState {
    /// Show repository for all show operations.
    pub show_repository: Arc<dyn ShowRepository>,
}

impl AppState {
    /// Creates a new `AppState` owning `repository`.
    #[must_use]
    pub fn new<R>(repository: R) -> Self
    where
        R: ShowRepository + 'static,
    {
        Self {
            show_repository: Arc::new(repository),
        }
    }
}

// =============================================================================
// GET / Handler
// =============================================================================

/// Greeting endpoint.
///
/// # Response
///
/// - **200 OK**: `{"result": {"content": "hello world!"}}`
#[allow(clippy::unused_async)]
pub async fn hello_world() -> Envelope {
    Envelope::ok(Payload::Content {
        content: "hello world!".to_string(),
    })
}

// =============================================================================
// GET /mirror/{name} Handler
// =============================================================================

/// Echoes the path segment back.
///
/// # Response
///
/// - **200 OK**: `{"result": {"name": "<name>"}}`
/// - **400 Bad Request**: the segment does not decode to UTF-8
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] carrying the extractor's message.
#[allow(clippy::unused_async)]
pub async fn mirror(
    name: Result<Path<String>, PathRejection>,
) -> Result<Envelope, ApiError> {
    let Path(name) = name.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(Envelope::ok(Payload::Mirror { name }))
}

// =============================================================================
// GET /health Handler
// =============================================================================

/// Health check endpoint for load balancers and orchestration systems.
#[allow(clippy::unused_async)]
pub async fn health_check() -> Envelope {
    Envelope::ok(Payload::Health {
        health: HealthStatus {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        },
    })
}

// =============================================================================
// Fallback Handlers
// =============================================================================

/// Answers requests for unknown routes with an envelope instead of an empty
/// body.
#[allow(clippy::unused_async)]
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

/// Answers a known route called with a method it does not serve.
#[allow(clippy::unused_async)]
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed".to_string())
}

// =============================================================================
// Tests
// =============================================================================
