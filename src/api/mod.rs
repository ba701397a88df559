//! API module for HTTP handlers.
//!
//! This module contains the response envelope, route definitions and
//! request handlers.

pub mod dto;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod shows;

pub use dto::{JsonObject, ShowsQuery, validate_create_request, validate_update_request};
pub use envelope::{Envelope, EnvelopeError, HealthStatus, Payload};
pub use error::{ApiError, NO_SHOWS_FIT_FILTER, SHOW_NOT_FOUND};
pub use handlers::{
    AppState, health_check, hello_world, method_not_allowed, mirror, not_found,
};
pub use routes::create_router;
pub use shows::{create_show, delete_show, get_show, list_shows, update_show};
