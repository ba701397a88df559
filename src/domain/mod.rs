//! Domain module for show tracking.
//!
//! This module contains the show entity and its value objects.

pub mod show;

pub use show::{NewShow, Show, ShowChanges, ShowId};
