//! Shows API Library
//!
//! A small HTTP API for tracking TV shows and how many episodes have been
//! watched. Every response is wrapped in the same JSON envelope.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod server;
