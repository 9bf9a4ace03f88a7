//! In-memory storage for tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StorageError;

use super::{EntityKind, Storage};

/// An in-memory [`Storage`] implementation.
///
/// Behaves like the file-backed store without touching disk. The lock only
/// satisfies the `&self` trait contract; there is a single logical writer.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    collections: RwLock<HashMap<EntityKind, serde_json::Value>>,
}

impl MemoryStorage {
    /// A blank store: the first load of each kind will seed sample data.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with empty collections for every kind,
    /// so loads return nothing instead of seeding.
    pub fn empty() -> Self {
        let storage = Self::default();
        {
            let mut collections = storage.collections.write().unwrap_or_else(|e| e.into_inner());
            for kind in EntityKind::ALL {
                collections.insert(*kind, serde_json::Value::Array(Vec::new()));
            }
        }
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, kind: EntityKind) -> Result<Option<serde_json::Value>, StorageError> {
        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        Ok(collections.get(&kind).cloned())
    }

    fn put(&self, kind: EntityKind, value: &serde_json::Value) -> Result<(), StorageError> {
        let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
        collections.insert(kind, value.clone());
        Ok(())
    }
}
