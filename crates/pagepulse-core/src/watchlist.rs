//! The watchlist: an ordered set of watched commenters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commenter flagged for ongoing attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    /// Opaque stable commenter identifier.
    pub user_id: String,
    /// Display name captured at add time.
    pub name: String,
    /// When the entry was added.
    pub added_at: DateTime<Utc>,
}

/// Ordered set of [`WatchlistEntry`] values keyed by `user_id`.
///
/// Set semantics: an id appears at most once, and entries keep insertion
/// order. Serializes as the plain entry array (`[{userId, name, addedAt}]`),
/// matching the persisted slot format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Membership test by user id.
    #[must_use]
    pub fn contains(&self, user_id: &str) -> bool {
        self.entries.iter().any(|e| e.user_id == user_id)
    }

    /// Appends an entry. No-op when the id is already present.
    /// Returns whether the list changed.
    pub fn add(&mut self, entry: WatchlistEntry) -> bool {
        if self.contains(&entry.user_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Removes the entry with the matching id. No-op when absent.
    /// Returns whether the list changed.
    pub fn remove(&mut self, user_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.user_id != user_id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WatchlistEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a WatchlistEntry;
    type IntoIter = std::slice::Iter<'a, WatchlistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
