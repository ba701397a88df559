//! API error handling.
//!
//! Handlers return `Result<Envelope, ApiError>`. An `ApiError` renders as an
//! envelope with no payload, so a client always receives the same JSON shape
//! whether the request succeeded or not.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::envelope::Envelope;
use crate::infrastructure::RepositoryError;

/// Message returned whenever a show id does not resolve.
pub const SHOW_NOT_FOUND: &str = "No show with this id exists";
/// Message returned when an episode filter matches nothing.
pub const NO_SHOWS_FIT_FILTER: &str = "No shows fit the specified minEpisode parameter";

// =============================================================================
// API Error
// =============================================================================

/// Errors surfaced to HTTP clients.
///
/// The `Display` text is the envelope message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The addressed resource does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// A required body field is missing or has the wrong type (422).
    #[error("{0}")]
    Validation(String),

    /// The path, query, or body could not be parsed (400).
    #[error("{0}")]
    BadRequest(String),

    /// The route exists but not for this method (405).
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Something failed on our side (500). The detail is logged, never sent.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The show addressed by id does not exist.
    #[must_use]
    pub fn show_not_found() -> Self {
        Self::NotFound(SHOW_NOT_FOUND.to_string())
    }

    /// No show satisfies the `minEpisodes` filter.
    #[must_use]
    pub fn no_shows_fit_filter() -> Self {
        Self::NotFound(NO_SHOWS_FIT_FILTER.to_string())
    }

    /// The `{id}` path segment is not an integer.
    #[must_use]
    pub fn invalid_show_id() -> Self {
        Self::BadRequest("Show id must be an integer".to_string())
    }

    /// A required body field was not provided.
    #[must_use]
    pub fn missing_parameter(field: &str) -> Self {
        Self::Validation(format!("<{field}> parameter is not provided"))
    }

    /// A body field was provided with the wrong type.
    #[must_use]
    pub fn invalid_parameter(field: &str) -> Self {
        Self::Validation(format!("<{field}> parameter is invalid"))
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message placed in the envelope.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), message = %self, "Request rejected");
        }

        let envelope: Envelope = Envelope::empty(status, self.client_message());
        envelope.into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(_) => Self::show_not_found(),
            RepositoryError::Storage(message) => Self::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShowId;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    fn test_missing_parameter_message() {
        let error = ApiError::missing_parameter("episodes_seen");
        assert_eq!(error.to_string(), "<episodes_seen> parameter is not provided");
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[rstest]
    fn test_invalid_parameter_message() {
        let error = ApiError::invalid_parameter("name");
        assert_eq!(error.to_string(), "<name> parameter is invalid");
    }

    #[rstest]
    #[case(ApiError::show_not_found(), StatusCode::NOT_FOUND)]
    #[case(ApiError::no_shows_fit_filter(), StatusCode::NOT_FOUND)]
    #[case(ApiError::missing_parameter("name"), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(ApiError::BadRequest("bad".to_string()), StatusCode::BAD_REQUEST)]
    #[case(ApiError::invalid_show_id(), StatusCode::BAD_REQUEST)]
    #[case(ApiError::MethodNotAllowed("no".to_string()), StatusCode::METHOD_NOT_ALLOWED)]
    #[case(ApiError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_status_code(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[rstest]
    fn test_internal_error_hides_detail() {
        let error = ApiError::Internal("lock poisoned".to_string());
        assert_eq!(error.client_message(), "An internal error occurred");
    }

    #[rstest]
    fn test_repository_error_conversion() {
        let error: ApiError = RepositoryError::NotFound(ShowId::new(1)).into();
        assert_eq!(error, ApiError::show_not_found());

        let error: ApiError = RepositoryError::Storage("disk".to_string()).into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest]
    #[tokio::test]
    async fn test_into_response_renders_envelope() {
        let response = ApiError::show_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": 404,
                "success": false,
                "message": "No show with this id exists",
                "result": null
            })
        );
    }
}
