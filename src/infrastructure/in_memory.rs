//! In-memory repository implementation.
//!
//! Shows are kept in a `BTreeMap` keyed by id so listings come out in id
//! order. Ids come from a counter that only moves forward: a deleted id is
//! never handed out again.
//!
//! # Features
//!
//! - Thread-safe with `Arc<RwLock<...>>`
//! - Clones share the same storage
//! - Fresh, isolated instances for every test

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{NewShow, Show, ShowChanges, ShowId};
use crate::infrastructure::{RepositoryError, ShowRepository};

// =============================================================================
// Seed Data
// =============================================================================

/// Returns the shows the service starts with when seeding is enabled.
#[must_use]
pub fn default_shows() -> Vec<Show> {
    vec![
        Show::new(ShowId::new(1), "Game of Thrones", 0),
        Show::new(ShowId::new(2), "Naruto", 220),
        Show::new(ShowId::new(3), "Black Mirror", 3),
        Show::new(ShowId::new(4), "Brooklyn Nine-Nine", 100),
        Show::new(ShowId::new(5), "Rick and Morty", 0),
    ]
}

// =============================================================================
// In-Memory Show Table
// =============================================================================

/// Rows plus the id allocator, guarded together so id assignment and insert
/// happen under one write lock.
#[derive(Debug)]
struct ShowTable {
    rows: BTreeMap<ShowId, Show>,
    next_id: ShowId,
}

impl ShowTable {
    const fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: ShowId::new(1),
        }
    }

    fn insert_existing(&mut self, show: Show) {
        if show.id >= self.next_id {
            self.next_id = show.id.next();
        }
        self.rows.insert(show.id, show);
    }

    fn allocate_id(&mut self) -> ShowId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

// =============================================================================
// In-Memory Show Repository
// =============================================================================

/// In-memory implementation of `ShowRepository`.
///
/// # Example
///
/// ```
/// use shows_api::domain::NewShow;
/// use shows_api::infrastructure::{InMemoryShowRepository, ShowRepository};
///
/// let repository = InMemoryShowRepository::new();
/// let show = repository.create(NewShow::new("Friends", 50)).unwrap();
///
/// assert_eq!(show.id.value(), 1);
/// assert!(repository.find_by_id(show.id).unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryShowRepository {
    table: Arc<RwLock<ShowTable>>,
}

impl InMemoryShowRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(ShowTable::new())),
        }
    }

    /// Creates a repository pre-populated with `shows`.
    ///
    /// The id counter is advanced past the highest seeded id.
    #[must_use]
    pub fn with_shows(shows: impl IntoIterator<Item = Show>) -> Self {
        let mut table = ShowTable::new();
        for show in shows {
            table.insert_existing(show);
        }
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Creates a repository holding [`default_shows`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_shows(default_shows())
    }

    /// Returns the number of stored shows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    /// Returns true if no shows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.read().rows.is_empty()
    }
}

impl Default for InMemoryShowRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowRepository for InMemoryShowRepository {
    fn find_all(&self) -> Result<Vec<Show>, RepositoryError> {
        let guard = self.table.read();
        Ok(guard.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: ShowId) -> Result<Option<Show>, RepositoryError> {
        let guard = self.table.read();
        Ok(guard.rows.get(&id).cloned())
    }

    fn find_by_min_episodes(&self, minimum: i64) -> Result<Vec<Show>, RepositoryError> {
        let guard = self.table.read();
        Ok(guard
            .rows
            .values()
            .filter(|show| show.has_seen_at_least(minimum))
            .cloned()
            .collect())
    }

    fn create(&self, show: NewShow) -> Result<Show, RepositoryError> {
        let mut guard = self.table.write();
        let id = guard.allocate_id();
        let show = show.with_id(id);
        guard.rows.insert(id, show.clone());
        tracing::debug!(%id, "Show stored");
        Ok(show)
    }

    fn update_by_id(&self, id: ShowId, changes: ShowChanges) -> Result<Show, RepositoryError> {
        let mut guard = self.table.write();
        let current = guard
            .rows
            .remove(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        let updated = current.apply(changes);
        guard.rows.insert(id, updated.clone());
        tracing::debug!(%id, "Show updated");
        Ok(updated)
    }

    fn delete_by_id(&self, id: ShowId) -> Result<bool, RepositoryError> {
        let mut guard = self.table.write();
        let removed = guard.rows.remove(&id).is_some();
        if removed {
            tracing::debug!(%id, "Show removed");
        }
        Ok(removed)
    }
}

// =============================================================================
// Tests
// =============================================================================
