//! Show domain model.
//!
//! A show is the only entity tracked by the API: a name and the number of
//! episodes the user has seen so far. Identifiers are assigned by the store.

use serde::{Deserialize, Serialize};

// =============================================================================
// Value Objects - Newtypes
// =============================================================================

/// Unique identifier for a show.
///
/// Assigned by the store on creation and never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(u64);

impl ShowId {
    /// Creates a `ShowId` from a raw integer.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ShowId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<u64> for ShowId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Show Entity
// =============================================================================

/// A stored show.
///
/// Serializes as `{"id": ..., "name": ..., "episodes_seen": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Identifier assigned by the store.
    pub id: ShowId,
    /// Display name of the show.
    pub name: String,
    /// Number of episodes watched.
    pub episodes_seen: i64,
}

impl Show {
    /// Creates a new show.
    #[must_use]
    pub fn new(id: ShowId, name: impl Into<String>, episodes_seen: i64) -> Self {
        Self {
            id,
            name: name.into(),
            episodes_seen,
        }
    }

    /// Returns a copy of this show with the given changes applied.
    ///
    /// Fields absent from `changes` keep their current value. The id never
    /// changes.
    #[must_use]
    pub fn apply(self, changes: ShowChanges) -> Self {
        Self {
            id: self.id,
            name: changes.name.unwrap_or(self.name),
            episodes_seen: changes.episodes_seen.unwrap_or(self.episodes_seen),
        }
    }

    /// Returns true if at least `minimum` episodes have been seen.
    #[must_use]
    pub const fn has_seen_at_least(&self, minimum: i64) -> bool {
        self.episodes_seen >= minimum
    }
}

/// A show that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewShow {
    /// Display name of the show.
    pub name: String,
    /// Number of episodes watched.
    pub episodes_seen: i64,
}

impl NewShow {
    /// Creates a new unsaved show.
    #[must_use]
    pub fn new(name: impl Into<String>, episodes_seen: i64) -> Self {
        Self {
            name: name.into(),
            episodes_seen,
        }
    }

    /// Attaches the store-assigned id.
    #[must_use]
    pub fn with_id(self, id: ShowId) -> Show {
        Show::new(id, self.name, self.episodes_seen)
    }
}

/// A set of field replacements applied to an existing show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShowChanges {
    /// Replacement name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement episode count.
    #[serde(default)]
    pub episodes_seen: Option<i64>,
}

impl ShowChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Sets the replacement episode count.
    #[must_use]
    pub fn with_episodes_seen(self, episodes_seen: i64) -> Self {
        Self {
            episodes_seen: Some(episodes_seen),
            ..self
        }
    }

    /// Returns true if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.episodes_seen.is_none()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_show_id_next() {
        assert_eq!(ShowId::new(1).next(), ShowId::new(2));
    }

    #[rstest]
    fn test_show_id_display() {
        assert_eq!(ShowId::new(42).to_string(), "42");
    }

    #[rstest]
    fn test_show_serializes_flat() {
        let show = Show::new(ShowId::new(1), "Friends", 50);
        let json = serde_json::to_value(&show).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Friends", "episodes_seen": 50})
        );
    }

    #[rstest]
    fn test_apply_replaces_present_fields() {
        let show = Show::new(ShowId::new(1), "Friends", 50);
        let changes = ShowChanges::new()
            .with_name("Frasier")
            .with_episodes_seen(60);

        let updated = show.apply(changes);

        assert_eq!(updated, Show::new(ShowId::new(1), "Frasier", 60));
    }

    #[rstest]
    fn test_apply_keeps_absent_fields() {
        let show = Show::new(ShowId::new(7), "Friends", 50);

        let updated = show.apply(ShowChanges::new().with_episodes_seen(60));

        assert_eq!(updated.id, ShowId::new(7));
        assert_eq!(updated.name, "Friends");
        assert_eq!(updated.episodes_seen, 60);
    }

    #[rstest]
    #[case(49, true)]
    #[case(50, true)]
    #[case(51, false)]
    fn test_has_seen_at_least(#[case] minimum: i64, #[case] expected: bool) {
        let show = Show::new(ShowId::new(1), "Friends", 50);
        assert_eq!(show.has_seen_at_least(minimum), expected);
    }

    #[rstest]
    fn test_changes_ignore_unknown_keys() {
        let changes: ShowChanges =
            serde_json::from_value(serde_json::json!({"id": 99, "rating": 5})).unwrap();

        assert!(changes.is_empty());
    }

    #[rstest]
    fn test_new_show_with_id() {
        let show = NewShow::new("Naruto", 220).with_id(ShowId::new(3));
        assert_eq!(show, Show::new(ShowId::new(3), "Naruto", 220));
    }
}
