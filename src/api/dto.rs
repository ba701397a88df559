//! Request DTOs and their validation.
//!
//! Show bodies arrive as raw JSON objects so that missing fields can be
//! reported by name, in a fixed order, before any type checks run.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::domain::{NewShow, ShowChanges};

/// Fields required by `POST /shows`, in the order they are checked.
pub const REQUIRED_SHOW_FIELDS: [&str; 2] = ["name", "episodes_seen"];

/// A JSON request body that must be an object.
pub type JsonObject = Map<String, Value>;

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters for `GET /shows`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowsQuery {
    /// Minimum number of episodes seen, as sent by the client.
    #[serde(default, rename = "minEpisodes")]
    pub min_episodes: Option<String>,
}

impl ShowsQuery {
    /// Returns the parsed episode filter.
    ///
    /// An absent or empty parameter means "no filter".
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BadRequest`] if the parameter is not an integer.
    pub fn min_episodes(&self) -> Result<Option<i64>, ApiError> {
        match self.min_episodes.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ApiError::BadRequest("minEpisodes must be an integer".to_string())),
        }
    }
}

// =============================================================================
// Body Validation
// =============================================================================

/// Validates a `POST /shows` body.
///
/// Presence is checked first, `name` before `episodes_seen`, so the message
/// always names the first missing field. Types are checked afterwards.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] naming the first missing or mistyped field.
pub fn validate_create_request(body: &JsonObject) -> Result<NewShow, ApiError> {
    if let Some(missing) = REQUIRED_SHOW_FIELDS
        .iter()
        .find(|field| !body.contains_key(**field))
    {
        return Err(ApiError::missing_parameter(missing));
    }

    let name = string_field(body, "name")?.unwrap_or_default();
    let episodes_seen = integer_field(body, "episodes_seen")?.unwrap_or_default();

    Ok(NewShow::new(name, episodes_seen))
}

/// Extracts the changes carried by a `PUT /shows/{id}` body.
///
/// Any subset of fields is accepted. Unknown keys, including `id`, are
/// ignored.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] if a known field has the wrong type.
pub fn validate_update_request(body: &JsonObject) -> Result<ShowChanges, ApiError> {
    Ok(ShowChanges {
        name: string_field(body, "name")?,
        episodes_seen: integer_field(body, "episodes_seen")?,
    })
}

fn string_field(body: &JsonObject, field: &str) -> Result<Option<String>, ApiError> {
    body.get(field)
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| ApiError::invalid_parameter(field))
        })
        .transpose()
}

fn integer_field(body: &JsonObject, field: &str) -> Result<Option<i64>, ApiError> {
    body.get(field)
        .map(|value| {
            value
                .as_i64()
                .ok_or_else(|| ApiError::invalid_parameter(field))
        })
        .transpose()
}

// =============================================================================
// Tests
// =============================================================================
