//! HTTP handlers for the show collection.
//!
//! Each handler follows the same pipeline:
//!
//! ```text
//! Request → Validate → Store → Envelope
//! ```
//!
//! Extractor rejections are taken as `Result`s and converted into
//! [`ApiError`]s so a malformed request still gets an envelope back.
//!
//! - `GET /shows` - List shows, optionally filtered by `minEpisodes`
//! - `GET /shows/{id}` - Get one show
//! - `POST /shows` - Create a show
//! - `PUT /shows/{id}` - Replace fields of a show
//! - `DELETE /shows/{id}` - Delete a show

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use super::dto::{JsonObject, ShowsQuery, validate_create_request, validate_update_request};
use super::envelope::{Envelope, Payload};
use super::error::ApiError;
use super::handlers::AppState;
use crate::domain::{Show, ShowId};

/// Resolves the `{id}` path segment.
///
/// Anything that reads as an integer is an id. Integers outside the id range
/// (negative, or wider than `u64`) can never name a stored show, so they are
/// reported as missing rather than malformed.
fn parse_show_id(path: Result<Path<String>, PathRejection>) -> Result<ShowId, ApiError> {
    let Path(raw) = path.map_err(|_| ApiError::invalid_show_id())?;
    let raw = raw.trim();

    if let Ok(value) = raw.parse::<u64>() {
        return Ok(ShowId::new(value));
    }
    if is_integer_literal(raw) {
        return Err(ApiError::show_not_found());
    }
    Err(ApiError::invalid_show_id())
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

fn find_show(state: &AppState, id: ShowId) -> Result<Show, ApiError> {
    state
        .show_repository
        .find_by_id(id)?
        .ok_or_else(ApiError::show_not_found)
}

// =============================================================================
// GET /shows Handler
// =============================================================================

/// Lists shows.
///
/// # Query Parameters
///
/// - `minEpisodes` (optional): only shows with at least this many episodes
///   seen are returned.
///
/// # Response
///
/// - **200 OK**: `{"result": {"shows": [...]}}`
/// - **400 Bad Request**: `minEpisodes` is not an integer
/// - **404 Not Found**: the filter matched no show
///
/// # Errors
///
/// Returns [`ApiError`] for the non-200 cases above.
#[allow(clippy::unused_async)]
pub async fn list_shows(
    State(state): State<AppState>,
    query: Result<Query<ShowsQuery>, QueryRejection>,
) -> Result<Envelope, ApiError> {
    let Query(query) = query?;

    let shows = match query.min_episodes()? {
        Some(minimum) => {
            let shows = state.show_repository.find_by_min_episodes(minimum)?;
            if shows.is_empty() {
                return Err(ApiError::no_shows_fit_filter());
            }
            tracing::debug!(minimum, count = shows.len(), "Filtered shows");
            shows
        }
        None => state.show_repository.find_all()?,
    };

    Ok(Envelope::ok(Payload::Shows { shows }))
}

// =============================================================================
// GET /shows/{id} Handler
// =============================================================================

/// Returns a single show.
///
/// # Response
///
/// - **200 OK**: `{"result": {"show": {...}}}`
/// - **400 Bad Request**: the id is not an integer
/// - **404 Not Found**: no show with this id
///
/// # Errors
///
/// Returns [`ApiError`] if the id is malformed or unknown.
#[allow(clippy::unused_async)]
pub async fn get_show(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Envelope, ApiError> {
    let id = parse_show_id(id)?;
    let show = find_show(&state, id)?;

    Ok(Envelope::ok(Payload::Show { show }))
}

// =============================================================================
// POST /shows Handler
// =============================================================================

/// Creates a show.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Friends",
///   "episodes_seen": 50
/// }
/// ```
///
/// # Response
///
/// - **201 Created**: the stored record, `{"result": {"id": .., "name": .., "episodes_seen": ..}}`
/// - **422 Unprocessable Entity**: `"<field> parameter is not provided"`
///
/// # Errors
///
/// Returns [`ApiError`] if the body is not a JSON object or a field is
/// missing or mistyped.
#[allow(clippy::unused_async)]
pub async fn create_show(
    State(state): State<AppState>,
    body: Result<Json<JsonObject>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    let Json(body) = body?;
    let new_show = validate_create_request(&body)?;

    let show = state.show_repository.create(new_show)?;
    tracing::info!(id = %show.id, name = %show.name, "Show created");

    Ok(Envelope::new(
        Some(Payload::Created(show)),
        StatusCode::CREATED,
        "",
    ))
}

// =============================================================================
// PUT /shows/{id} Handler
// =============================================================================

/// Replaces fields of an existing show.
///
/// Any subset of `name` and `episodes_seen` may be sent; absent fields keep
/// their stored values and unknown keys are ignored.
///
/// # Response
///
/// - **201 Created**: `{"result": {"show": {...}}}`
/// - **404 Not Found**: no show with this id
///
/// # Errors
///
/// Returns [`ApiError`] if the id is unknown or the body is malformed. The
/// id is checked before the body.
#[allow(clippy::unused_async)]
pub async fn update_show(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<JsonObject>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    let id = parse_show_id(id)?;
    let current = find_show(&state, id)?;

    let Json(body) = body?;
    let changes = validate_update_request(&body)?;

    let show = if changes.is_empty() {
        tracing::debug!(%id, "Update carried no known fields");
        current
    } else {
        let show = state.show_repository.update_by_id(id, changes)?;
        tracing::info!(%id, "Show updated");
        show
    };

    Ok(Envelope::new(
        Some(Payload::Show { show }),
        StatusCode::CREATED,
        "",
    ))
}

// =============================================================================
// DELETE /shows/{id} Handler
// =============================================================================

/// Deletes a show.
///
/// # Response
///
/// - **200 OK**: message `"Show deleted"`, `"result": null`
/// - **404 Not Found**: no show with this id
///
/// # Errors
///
/// Returns [`ApiError`] if the id is malformed or unknown.
#[allow(clippy::unused_async)]
pub async fn delete_show(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Envelope, ApiError> {
    let id = parse_show_id(id)?;

    if !state.show_repository.delete_by_id(id)? {
        return Err(ApiError::show_not_found());
    }
    tracing::info!(%id, "Show deleted");

    Ok(Envelope::empty(StatusCode::OK, "Show deleted"))
}

// =============================================================================
// Tests
// =============================================================================
