//! Infrastructure module for storage and configuration.
//!
//! This module contains the show repository and its in-memory
//! implementation, plus environment-driven configuration.

pub mod config;
pub mod in_memory;
pub mod repository;

pub use config::{AppConfig, ConfigError};
pub use in_memory::{InMemoryShowRepository, default_shows};
pub use repository::{RepositoryError, ShowRepository};
