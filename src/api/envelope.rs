//! Response envelope.
//!
//! Every response body produced by the API, successful or not, has the same
//! shape:
//!
//! ```json
//! {
//!   "code": 200,
//!   "success": true,
//!   "message": "",
//!   "result": { "shows": [] }
//! }
//! ```
//!
//! `success` is derived from `code` and is true exactly for 2xx codes.
//! `result` is `null` or a JSON object whose key names the payload
//! (`"shows"`, `"show"`, ...). The one exception is the create endpoint, whose
//! result is the created record itself.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::Show;

// =============================================================================
// Payload
// =============================================================================

/// Health information reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Typed envelope payloads, one variant per kind of result.
///
/// Serialized untagged: each variant is already a JSON object with a single
/// named key, except `Created`, which is the bare show record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// `{"content": ...}`
    Content { content: String },
    /// `{"name": ...}`
    Mirror { name: String },
    /// `{"shows": [...]}`
    Shows { shows: Vec<Show> },
    /// `{"show": {...}}`
    Show { show: Show },
    /// `{"id": ..., "name": ..., "episodes_seen": ...}`
    Created(Show),
    /// `{"health": {...}}`
    Health { health: HealthStatus },
}

// =============================================================================
// Envelope Error
// =============================================================================

/// Errors raised while building an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The payload was present but was not a JSON object.
    #[error("Envelope payload must be a JSON object, got {kind}")]
    PayloadNotMapping {
        /// JSON type of the rejected payload.
        kind: &'static str,
    },
}

// =============================================================================
// Envelope
// =============================================================================

/// The uniform JSON body wrapped around every response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T = Payload> {
    /// HTTP status code, repeated in the body.
    pub code: u16,
    /// True for 2xx codes.
    pub success: bool,
    /// Human-readable message, empty when there is nothing to say.
    pub message: String,
    /// Payload, or `null`.
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    /// Builds an envelope.
    #[must_use]
    pub fn new(result: Option<T>, status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            result,
        }
    }

    /// Builds a `200 OK` envelope with an empty message.
    #[must_use]
    pub fn ok(result: T) -> Self {
        Self::new(Some(result), StatusCode::OK, "")
    }

    /// Builds an envelope with no payload.
    #[must_use]
    pub fn empty(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(None, status, message)
    }

    /// Replaces the status code, keeping `success` consistent with it.
    #[must_use]
    pub fn with_status(self, status: StatusCode) -> Self {
        Self {
            code: status.as_u16(),
            success: status.is_success(),
            ..self
        }
    }

    /// Replaces the message.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    /// Returns the status code to send on the transport response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Envelope<Value> {
    /// Builds an envelope around an untyped JSON payload.
    ///
    /// `None` and JSON `null` both produce `"result": null`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::PayloadNotMapping`] if the payload is present
    /// but is not a JSON object.
    pub fn from_json(
        result: Option<Value>,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Result<Self, EnvelopeError> {
        match result {
            None | Some(Value::Null) => Ok(Self::empty(status, message)),
            Some(object @ Value::Object(_)) => Ok(Self::new(Some(object), status, message)),
            Some(other) => Err(EnvelopeError::PayloadNotMapping {
                kind: json_kind(&other),
            }),
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
