//! Repository trait for the show collection.
//!
//! The repository is the storage collaborator behind every handler. It is
//! owned by the application state and injected into handlers, never reached
//! through a global.

use thiserror::Error;

use crate::domain::{NewShow, Show, ShowChanges, ShowId};

// =============================================================================
// Repository Error
// =============================================================================

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No show with the given id is stored.
    #[error("Show not found: {0}")]
    NotFound(ShowId),

    /// The backing storage failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

// =============================================================================
// Show Repository
// =============================================================================

/// Repository trait for Show entities.
///
/// Implementations serialize their own mutations; callers may share one
/// repository across concurrently running handlers.
pub trait ShowRepository: Send + Sync {
    /// Returns every stored show, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the storage cannot be read.
    fn find_all(&self) -> Result<Vec<Show>, RepositoryError>;

    /// Finds a show by its id.
    ///
    /// Returns `Ok(None)` if no show has this id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the storage cannot be read.
    fn find_by_id(&self, id: ShowId) -> Result<Option<Show>, RepositoryError>;

    /// Returns the shows with at least `minimum` episodes seen, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the storage cannot be read.
    fn find_by_min_episodes(&self, minimum: i64) -> Result<Vec<Show>, RepositoryError>;

    /// Stores a new show and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the storage cannot be written.
    fn create(&self, show: NewShow) -> Result<Show, RepositoryError>;

    /// Applies `changes` to the show with the given id and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no show has this id.
    fn update_by_id(&self, id: ShowId, changes: ShowChanges) -> Result<Show, RepositoryError>;

    /// Removes the show with the given id.
    ///
    /// Returns `Ok(true)` if a show was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the storage cannot be written.
    fn delete_by_id(&self, id: ShowId) -> Result<bool, RepositoryError>;
}
