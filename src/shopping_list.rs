//! Shopping lists: CRUD, item-level mutation, and merge-on-add.

use chrono::Utc;
use uuid::Uuid;

use crate::error::StorageError;
use crate::seed;
use crate::storage::{self, EntityKind, Storage};
use crate::types::{NewShoppingItem, Recipe, ShoppingList};

/// Owns the shopping list collection, loaded once from storage.
pub struct ShoppingListStore<S: Storage> {
    storage: S,
    lists: Vec<ShoppingList>,
}

impl<S: Storage> ShoppingListStore<S> {
    /// Load the shopping lists, seeding sample data on first use.
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let lists =
            storage::load_or_seed(&storage, EntityKind::ShoppingLists, seed::shopping_lists)?;
        tracing::debug!(count = lists.len(), "loaded shopping lists");
        Ok(Self { storage, lists })
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::persist(&self.storage, EntityKind::ShoppingLists, &self.lists)
    }

    /// All lists in insertion order.
    pub fn all(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn get(&self, id: Uuid) -> Option<&ShoppingList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Create a list with a fresh id and the current timestamp.
    /// Each item gets its own fresh id and starts unchecked.
    pub fn create_list(
        &mut self,
        name: impl Into<String>,
        items: Vec<NewShoppingItem>,
    ) -> Result<ShoppingList, StorageError> {
        let list = ShoppingList {
            id: Uuid::new_v4(),
            name: name.into(),
            items: items.into_iter().map(NewShoppingItem::into_item).collect(),
            created_at: Utc::now(),
        };

        self.lists.push(list.clone());
        self.persist()?;
        Ok(list)
    }

    /// Add items to a list, combining duplicates.
    ///
    /// A new item merges into an existing one when the names match
    /// case-insensitively and the unit strings match exactly; the amounts are
    /// summed and the existing item keeps its id and checked state. Everything
    /// else is appended as a fresh, unchecked item. Unknown list ids are
    /// ignored.
    pub fn add_items(
        &mut self,
        list_id: Uuid,
        new_items: Vec<NewShoppingItem>,
    ) -> Result<(), StorageError> {
        let Some(list) = self.lists.iter_mut().find(|l| l.id == list_id) else {
            tracing::debug!(%list_id, "add_items for unknown list, ignoring");
            return Ok(());
        };

        for new_item in new_items {
            let key = new_item.name.to_lowercase();
            let existing = list
                .items
                .iter_mut()
                .find(|item| item.name.to_lowercase() == key && item.unit == new_item.unit);

            match existing {
                Some(item) => item.amount += new_item.amount,
                None => list.items.push(new_item.into_item()),
            }
        }

        self.persist()
    }

    /// Replace the list with the same id. Unknown ids are ignored.
    pub fn update_list(&mut self, list: ShoppingList) -> Result<(), StorageError> {
        match self.lists.iter_mut().find(|l| l.id == list.id) {
            Some(existing) => {
                *existing = list;
                self.persist()
            }
            None => {
                tracing::debug!(id = %list.id, "update for unknown list, ignoring");
                Ok(())
            }
        }
    }

    pub fn delete_list(&mut self, id: Uuid) -> Result<(), StorageError> {
        let before = self.lists.len();
        self.lists.retain(|l| l.id != id);
        if self.lists.len() == before {
            tracing::debug!(%id, "delete for unknown list, ignoring");
            return Ok(());
        }
        self.persist()
    }

    /// Flip one item's checked flag within one list.
    pub fn toggle_item(&mut self, list_id: Uuid, item_id: Uuid) -> Result<(), StorageError> {
        let item = self
            .lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .and_then(|l| l.items.iter_mut().find(|i| i.id == item_id));

        match item {
            Some(item) => {
                item.checked = !item.checked;
                self.persist()
            }
            None => {
                tracing::debug!(%list_id, %item_id, "toggle for unknown item, ignoring");
                Ok(())
            }
        }
    }

    /// Build a list straight from a recipe's ingredients.
    ///
    /// Items keep the recipe's weak back-reference. Duplicate ingredient
    /// names within the recipe stay separate entries here; merge-on-add only
    /// applies to [`add_items`](Self::add_items).
    pub fn create_from_recipe(
        &mut self,
        recipe: &Recipe,
        name: Option<String>,
    ) -> Result<ShoppingList, StorageError> {
        let name = name.unwrap_or_else(|| format!("{} Shopping List", recipe.title));
        let items = recipe
            .ingredients
            .iter()
            .map(|ingredient| NewShoppingItem {
                name: ingredient.name.clone(),
                amount: ingredient.amount,
                unit: ingredient.unit.clone(),
                recipe_id: Some(recipe.id),
            })
            .collect();

        self.create_list(name, items)
    }
}
