//! Pluggable key-value persistence for whole entity collections.
//!
//! Each entity kind is stored as one JSON array, replaced wholesale on every
//! save. Stores inject a [`Storage`] implementation at construction, so tests
//! substitute [`MemoryStorage`] for the file-backed store.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Namespaces for the persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Recipes,
    ShoppingLists,
    MealPlans,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Recipes,
        EntityKind::ShoppingLists,
        EntityKind::MealPlans,
    ];

    /// Stable key used to address this collection in the backing store.
    pub fn key(&self) -> &'static str {
        match self {
            EntityKind::Recipes => "recipes",
            EntityKind::ShoppingLists => "shopping_lists",
            EntityKind::MealPlans => "meal_plans",
        }
    }
}

/// Key-value read/write of whole collections, keyed by entity kind.
///
/// `get` returns `None` when nothing has been persisted for a kind yet.
/// There are no partial writes: `put` replaces the entire collection.
pub trait Storage {
    fn get(&self, kind: EntityKind) -> Result<Option<serde_json::Value>, StorageError>;
    fn put(&self, kind: EntityKind, value: &serde_json::Value) -> Result<(), StorageError>;
}

// Allow several stores to share one backing store by reference.
impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, kind: EntityKind) -> Result<Option<serde_json::Value>, StorageError> {
        (**self).get(kind)
    }

    fn put(&self, kind: EntityKind, value: &serde_json::Value) -> Result<(), StorageError> {
        (**self).put(kind, value)
    }
}

/// Load a collection, seeding it with sample data on first use.
///
/// When nothing is persisted for `kind`, the seed dataset is written back to
/// the store before being returned, so subsequent loads see the same data.
pub fn load_or_seed<T, S, F>(storage: &S, kind: EntityKind, seed: F) -> Result<Vec<T>, StorageError>
where
    T: Serialize + DeserializeOwned,
    S: Storage,
    F: FnOnce() -> Vec<T>,
{
    if let Some(value) = storage.get(kind)? {
        return Ok(serde_json::from_value(value)?);
    }

    let entities = seed();
    storage.put(kind, &serde_json::to_value(&entities)?)?;
    tracing::debug!(
        kind = kind.key(),
        count = entities.len(),
        "seeded empty collection with sample data"
    );
    Ok(entities)
}

/// Serialize and persist a full collection for `kind`.
pub(crate) fn persist<T, S>(storage: &S, kind: EntityKind, entities: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: Storage,
{
    storage.put(kind, &serde_json::to_value(entities)?)
}
