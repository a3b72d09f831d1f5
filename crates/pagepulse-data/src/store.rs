//! Watchlist persistence.
//!
//! The watchlist is the only mutable state in the system: a single
//! serialized entry array in a scoped slot, written after every mutation
//! and rehydrated once at startup. The store is an explicit injected
//! capability so callers can swap the backend (file, memory, whatever)
//! without touching the list logic.

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

use pagepulse_core::{Watchlist, WatchlistEntry};
use thiserror::Error;

/// Errors writing the watchlist slot.
///
/// Reads never error: an absent or corrupt slot degrades to an empty list
/// so the views still render.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write watchlist: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize watchlist: {0}")]
    Json(#[from] serde_json::Error),
}

/// A persistence backend for the watchlist.
pub trait WatchlistStore {
    /// Reads the persisted watchlist. An absent slot yields an empty list;
    /// a corrupt payload is logged and swallowed, also yielding an empty
    /// list — never an error to the caller.
    fn load(&self) -> Watchlist;

    /// Writes the full list to the slot, replacing any previous content.
    fn save(&self, watchlist: &Watchlist) -> Result<(), StoreError>;
}

/// File-backed store: one JSON file holding the serialized entry array.
///
/// Single-writer model; concurrent writers are last-write-wins with no
/// cross-process coordination.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WatchlistStore for JsonFileStore {
    fn load(&self) -> Watchlist {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Watchlist::new(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "failed to read watchlist slot, starting empty"
                );
                return Watchlist::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(watchlist) => watchlist,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "corrupt watchlist slot, starting empty"
                );
                Watchlist::new()
            }
        }
    }

    fn save(&self, watchlist: &Watchlist) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(watchlist)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Watchlist>,
}

impl WatchlistStore for MemoryStore {
    fn load(&self) -> Watchlist {
        self.slot.borrow().clone()
    }

    fn save(&self, watchlist: &Watchlist) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = watchlist.clone();
        Ok(())
    }
}

/// A watchlist bound to its store, persisted after every mutation.
///
/// Mutations that leave the list unchanged (duplicate add, absent remove)
/// skip the write.
#[derive(Debug)]
pub struct PersistedWatchlist<S: WatchlistStore> {
    store: S,
    list: Watchlist,
}

impl<S: WatchlistStore> PersistedWatchlist<S> {
    /// Rehydrates the list from the store.
    pub fn open(store: S) -> Self {
        let list = store.load();
        Self { store, list }
    }

    /// The current list.
    #[must_use]
    pub const fn list(&self) -> &Watchlist {
        &self.list
    }

    #[must_use]
    pub fn contains(&self, user_id: &str) -> bool {
        self.list.contains(user_id)
    }

    /// Adds and persists. Returns whether the list changed.
    pub fn add(&mut self, entry: WatchlistEntry) -> Result<bool, StoreError> {
        if !self.list.add(entry) {
            return Ok(false);
        }
        self.store.save(&self.list)?;
        Ok(true)
    }

    /// Removes and persists. Returns whether the list changed.
    pub fn remove(&mut self, user_id: &str) -> Result<bool, StoreError> {
        if !self.list.remove(user_id) {
            return Ok(false);
        }
        self.store.save(&self.list)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn entry(user_id: &str, name: &str) -> WatchlistEntry {
        WatchlistEntry {
            user_id: user_id.to_string(),
            name: name.to_string(),
            added_at: Utc::now(),
        }
    }

    #[test]
    fn missing_slot_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("watchlist.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_slot_loads_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("watchlist.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_empty());
        // The corrupt payload stays untouched until the next save.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("watchlist.json"));

        let mut list = Watchlist::new();
        list.add(entry("u1", "Ana"));
        list.add(entry("u2", "Ben"));
        store.save(&list).unwrap();

        assert_eq!(store.load(), list);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("state/pagepulse/watchlist.json"));
        store.save(&Watchlist::new()).unwrap();
        assert!(temp.path().join("state/pagepulse/watchlist.json").exists());
    }

    #[test]
    fn persisted_watchlist_writes_on_every_mutation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("watchlist.json");

        let mut persisted = PersistedWatchlist::open(JsonFileStore::new(&path));
        assert!(persisted.add(entry("u1", "Ana")).unwrap());

        // A fresh handle sees the mutation immediately.
        let reloaded = PersistedWatchlist::open(JsonFileStore::new(&path));
        assert!(reloaded.contains("u1"));

        assert!(persisted.remove("u1").unwrap());
        let reloaded = PersistedWatchlist::open(JsonFileStore::new(&path));
        assert!(!reloaded.contains("u1"));
        assert!(reloaded.list().is_empty());
    }

    #[test]
    fn unchanged_mutations_skip_the_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("watchlist.json");

        let mut persisted = PersistedWatchlist::open(JsonFileStore::new(&path));
        assert!(!persisted.remove("missing").unwrap());
        assert!(!path.exists());

        persisted.add(entry("u1", "Ana")).unwrap();
        let written = std::fs::metadata(&path).unwrap().modified().unwrap();
        assert!(!persisted.add(entry("u1", "Ana")).unwrap());
        assert_eq!(
            std::fs::metadata(&path).unwrap().modified().unwrap(),
            written
        );
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        let mut list = Watchlist::new();
        list.add(entry("u1", "Ana"));
        store.save(&list).unwrap();
        assert_eq!(store.load(), list);
    }
}
