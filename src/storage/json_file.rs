//! File-backed storage: one pretty-printed JSON file per entity kind.

use std::fs;
use std::path::PathBuf;

use crate::error::StorageError;

use super::{EntityKind, Storage};

/// Stores each collection as `<dir>/<kind>.json`.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a JsonFileStorage rooted at the given directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the default data directory: ~/.larder
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".larder"))
            .unwrap_or_else(|| PathBuf::from("data/larder"))
    }

    fn path_for(&self, kind: EntityKind) -> PathBuf {
        self.dir.join(format!("{}.json", kind.key()))
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, kind: EntityKind) -> Result<Option<serde_json::Value>, StorageError> {
        let path = self.path_for(kind);
        if !path.exists() {
            tracing::debug!(kind = kind.key(), "no persisted collection yet");
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn put(&self, kind: EntityKind, value: &serde_json::Value) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(kind), serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}
