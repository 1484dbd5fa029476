//! Persistence of `ProgressState` behind a small key/value seam.
//!
//! The progress record lives under a single fixed key. The file backend
//! maps each key to `<dir>/<key>.json`; the memory backend exists so the
//! tracker can be exercised without touching disk.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use arc_logistics_catalog::Catalog;

use crate::error::StoreError;
use crate::progress::{ProgressState, StoredProgress};

/// Storage key for the persisted progress record.
pub const PROGRESS_KEY: &str = "arc_raiders_progress_v1";

/// Minimal string key/value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ── File backend ────────────────────────────────────────────────────────────

/// Stores each key as a JSON file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that backs `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path.display().to_string(), e)),
        }
    }

    /// Write atomically (write to temp, then rename).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let io_err = |e| StoreError::io(path.display().to_string(), e);

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(io_err)?;
        std::fs::rename(&tmp, &path).map_err(io_err)?;
        Ok(())
    }
}

// ── Memory backend ──────────────────────────────────────────────────────────

/// In-memory key/value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.borrow_mut().insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ── Progress store ──────────────────────────────────────────────────────────

/// Loads and saves the player's `ProgressState`.
#[derive(Debug)]
pub struct ProgressStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load saved progress, returning defaults if missing or corrupt.
    ///
    /// The result is always within the catalog's bounds.
    pub fn load(&self, catalog: &Catalog) -> ProgressState {
        let contents = match self.backend.get(PROGRESS_KEY) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                log::debug!("No saved progress found, starting fresh");
                return ProgressState::default_for(catalog);
            }
            Err(e) => {
                log::warn!("Failed to read saved progress: {}", e);
                return ProgressState::default_for(catalog);
            }
        };

        match serde_json::from_str::<StoredProgress>(&contents) {
            Ok(stored) => {
                let state = stored.normalize(catalog);
                if StoredProgress::from(&state) != stored {
                    log::debug!("Saved progress was outside catalog bounds; clamped");
                }
                state
            }
            Err(e) => {
                log::warn!("Failed to parse saved progress: {}", e);
                ProgressState::default_for(catalog)
            }
        }
    }

    /// Persist the whole state record.
    pub fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(state)?;
        self.backend.set(PROGRESS_KEY, &contents)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
