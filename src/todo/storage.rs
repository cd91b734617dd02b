//! Best-effort persistence for to-do lists.
//!
//! A list is stored as a JSON array under a string key. Loading never fails
//! from the widget's point of view: [`load_or_empty`] turns a missing or
//! malformed entry into an empty list and logs why.

use super::item::TodoItem;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the simple to-do list is saved under.
pub const DEFAULT_KEY: &str = "focusTodos";

const STORE_DIR_NAME: &str = "xotools";

/// Why a load or save failed.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No entry under the key.
    #[error("Nothing stored under key: {0}")]
    NotFound(String),

    /// The entry is not a valid list.
    #[error("Stored list under key {key} is malformed: {source}")]
    Parse {
        /// Key that was read.
        key: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The list could not be encoded for saving.
    #[error("Failed to encode list for key {key}: {source}")]
    Serialize {
        /// Key that was written.
        key: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the backing store failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A key/value home for serialized lists.
pub trait Storage: Send {
    /// Reads the list stored under `key`.
    fn load(&self, key: &str) -> Result<Vec<TodoItem>, StorageError>;
    /// Replaces the list stored under `key`.
    fn save(&mut self, key: &str, items: &[TodoItem]) -> Result<(), StorageError>;
}

fn parse(key: &str, raw: &str) -> Result<Vec<TodoItem>, StorageError> {
    serde_json::from_str(raw).map_err(|source| StorageError::Parse {
        key: key.to_string(),
        source,
    })
}

fn serialize(key: &str, items: &[TodoItem]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })
}

/// Raw strings kept in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `raw` as-is under `key`, valid JSON or not.
    pub fn insert_raw(&mut self, key: &str, raw: &str) {
        self.entries.insert(key.to_string(), raw.to_string());
    }

    /// The raw string under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Vec<TodoItem>, StorageError> {
        let raw = self
            .entries
            .get(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        parse(key, raw)
    }

    fn save(&mut self, key: &str, items: &[TodoItem]) -> Result<(), StorageError> {
        let raw = serialize(key, items)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Stores files in `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Stores files in `<config dir>/xotools`, falling back to the working
    /// directory when the platform has no config dir.
    pub fn in_config_dir() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(STORE_DIR_NAME))
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Vec<TodoItem>, StorageError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        parse(key, &raw)
    }

    fn save(&mut self, key: &str, items: &[TodoItem]) -> Result<(), StorageError> {
        let raw = serialize(key, items)?;
        fs::create_dir_all(&self.dir)?;
        // Write a sibling file, then rename it over the target.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Loads `key`, treating every failure as an empty list. Missing entries are
/// expected on first run; anything else is logged.
pub fn load_or_empty(storage: &dyn Storage, key: &str) -> Vec<TodoItem> {
    match storage.load(key) {
        Ok(items) => items,
        Err(StorageError::NotFound(_)) => Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, key, "failed to load saved todos, starting empty");
            Vec::new()
        }
    }
}

/// Saves `items` under `key`, logging instead of returning a failure.
pub fn save_or_log(storage: &mut dyn Storage, key: &str, items: &[TodoItem]) {
    if let Err(e) = storage.save(key, items) {
        tracing::warn!(error = %e, key, "failed to save todos");
    }
}
