//! Session persistence.
//!
//! The engine talks to storage through a single string-keyed port,
//! [`KeyValueStore`]. [`GameStore`] wraps a backend and absorbs every
//! failure at the boundary: errors are logged and the wrapper degrades to
//! in-memory operation, so a broken store can cost saved progress but
//! never gameplay.

use std::collections::HashMap;

use crate::card::Category;
use crate::error::StoreError;
use crate::game::SavedGame;
use crate::player::Player;

/// Persisted key for the session blob.
pub const GAME_STATE_KEY: &str = "schluck-mal-game-state";
/// Persisted key for the last-used player roster.
pub const LAST_PLAYERS_KEY: &str = "schluck-mal-last-players";
/// Persisted key for the last-used category selection.
pub const LAST_CATEGORIES_KEY: &str = "schluck-mal-last-categories";

/// Asynchronicity-agnostic key-value storage port.
///
/// Backends that are natively asynchronous (IndexedDB, platform
/// preferences APIs) queue internally and complete writes in the
/// background; the engine only needs the submitted-or-failed answer.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`] for tests, demos, and degraded mode.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Resilient session store.
///
/// All methods are infallible from the caller's perspective. A failed
/// session write is kept in memory and retried on the next save, so the
/// periodic autosave heals transient backend outages on its own.
#[derive(Debug)]
pub struct GameStore<S: KeyValueStore> {
    backend: S,
    /// Last session blob that failed to persist; retried on the next save.
    pending: Option<SavedGame>,
}

impl<S: KeyValueStore> GameStore<S> {
    /// Wraps a storage backend.
    pub const fn new(backend: S) -> Self {
        Self {
            backend,
            pending: None,
        }
    }

    /// Consumes the store and returns the backend.
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Persists the session blob, retrying any previously failed write
    /// first.
    ///
    /// Failures are logged and the blob is held in memory for the next
    /// attempt; gameplay is never interrupted.
    pub fn save_game(&mut self, state: &SavedGame) {
        self.pending = None;
        if let Err(err) = self.try_save(state) {
            tracing::warn!(error = %err, "failed to save game state, will retry");
            self.pending = Some(state.clone());
        }
    }

    fn try_save(&mut self, state: &SavedGame) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)?;
        self.backend.set(GAME_STATE_KEY, &json)
    }

    /// Loads the persisted session, applying the staleness rule.
    ///
    /// A blob older than `stale_after_ms` is deleted and treated as
    /// absent. Backend and parse failures are logged and also reported as
    /// "no saved session"; a write that never reached the backend but is
    /// still pending in memory is returned instead.
    pub fn load_game(&mut self, now_ms: u64, stale_after_ms: u64) -> Option<SavedGame> {
        let raw = match self.backend.get(GAME_STATE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load game state");
                return self.pending.clone();
            }
        };

        let state: SavedGame = match raw {
            Some(json) => match serde_json::from_str(&json) {
                Ok(state) => state,
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable game state");
                    self.clear_game();
                    return None;
                }
            },
            None => return self.pending.clone(),
        };

        if now_ms.saturating_sub(state.timestamp) > stale_after_ms {
            tracing::debug!("discarding stale game state");
            self.clear_game();
            return None;
        }

        Some(state)
    }

    /// Deletes the persisted session and any pending retry.
    pub fn clear_game(&mut self) {
        self.pending = None;
        if let Err(err) = self.backend.remove(GAME_STATE_KEY) {
            tracing::warn!(error = %err, "failed to clear game state");
        }
    }

    /// Remembers the roster for pre-filling the next setup screen.
    pub fn save_last_players(&mut self, players: &[Player]) {
        self.save_setting(LAST_PLAYERS_KEY, &players);
    }

    /// Loads the roster from the previous game, if any.
    pub fn load_last_players(&mut self) -> Option<Vec<Player>> {
        self.load_setting(LAST_PLAYERS_KEY)
    }

    /// Remembers the category selection for the next setup screen.
    pub fn save_last_categories(&mut self, categories: &[Category]) {
        self.save_setting(LAST_CATEGORIES_KEY, &categories);
    }

    /// Loads the category selection from the previous game, if any.
    pub fn load_last_categories(&mut self) -> Option<Vec<Category>> {
        self.load_setting(LAST_CATEGORIES_KEY)
    }

    /// Persists a JSON-serializable setting (booleans, strings, small
    /// structs). Failures are logged and absorbed.
    pub fn save_setting<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StoreError::from)
            .and_then(|json| self.backend.set(key, &json));
        if let Err(err) = result {
            tracing::warn!(key, error = %err, "failed to save setting");
        }
    }

    /// Loads a setting saved with [`GameStore::save_setting`]. Unreadable
    /// or missing values are reported as absent.
    pub fn load_setting<T: serde::de::DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        match self.backend.get(key) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!(key, error = %err, "discarding unreadable setting");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to load setting");
                None
            }
        }
    }
}
