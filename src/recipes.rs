//! The recipe collection: CRUD, favorite/rating mutation, and filtering.

use chrono::Utc;
use uuid::Uuid;

use crate::error::StorageError;
use crate::seed;
use crate::storage::{self, EntityKind, Storage};
use crate::types::{NewRecipe, Recipe};

/// Owns the in-memory recipe collection, loaded once from storage.
///
/// Every mutation updates the cached copy and persists the full collection.
/// Not-found conditions are silent no-ops, consistent with a best-effort
/// local cache.
pub struct RecipeStore<S: Storage> {
    storage: S,
    recipes: Vec<Recipe>,
}

impl<S: Storage> RecipeStore<S> {
    /// Load the recipe collection, seeding sample data on first use.
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let recipes = storage::load_or_seed(&storage, EntityKind::Recipes, seed::recipes)?;
        tracing::debug!(count = recipes.len(), "loaded recipe collection");
        Ok(Self { storage, recipes })
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::persist(&self.storage, EntityKind::Recipes, &self.recipes)
    }

    /// All recipes in insertion order.
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Create a recipe with a fresh id and the current timestamp.
    pub fn add(&mut self, new: NewRecipe) -> Result<Recipe, StorageError> {
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            image: new.image,
            prep_time: new.prep_time,
            cook_time: new.cook_time,
            servings: new.servings,
            ingredients: new.ingredients,
            instructions: new.instructions,
            category: new.category,
            cuisine: new.cuisine,
            dietary: new.dietary,
            favorite: new.favorite,
            rating: new.rating,
            created_at: Utc::now(),
        };

        self.recipes.push(recipe.clone());
        self.persist()?;
        Ok(recipe)
    }

    /// Replace the recipe with the same id. Unknown ids are ignored.
    pub fn update(&mut self, recipe: Recipe) -> Result<(), StorageError> {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => {
                *existing = recipe;
                self.persist()
            }
            None => {
                tracing::debug!(id = %recipe.id, "update for unknown recipe, ignoring");
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Result<(), StorageError> {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            tracing::debug!(%id, "remove for unknown recipe, ignoring");
            return Ok(());
        }
        self.persist()
    }

    pub fn toggle_favorite(&mut self, id: Uuid) -> Result<(), StorageError> {
        match self.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.favorite = !recipe.favorite;
                self.persist()
            }
            None => {
                tracing::debug!(%id, "toggle_favorite for unknown recipe, ignoring");
                Ok(())
            }
        }
    }

    pub fn set_rating(&mut self, id: Uuid, rating: u8) -> Result<(), StorageError> {
        match self.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.rating = rating;
                self.persist()
            }
            None => {
                tracing::debug!(%id, "set_rating for unknown recipe, ignoring");
                Ok(())
            }
        }
    }

    /// Recipes matching every populated criterion, in insertion order.
    pub fn filter(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| filter.matches(r)).collect()
    }
}

/// Conjunctive recipe filter; absent fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Case-insensitive substring match against the title.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Exact cuisine match.
    pub cuisine: Option<String>,
    /// Membership test against the dietary tag set.
    pub dietary: Option<String>,
    /// Exact favorite-flag match.
    pub favorite: Option<bool>,
}

impl RecipeFilter {
    fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(search) = &self.search {
            if !recipe
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &recipe.category != category {
                return false;
            }
        }
        if let Some(cuisine) = &self.cuisine {
            if &recipe.cuisine != cuisine {
                return false;
            }
        }
        if let Some(dietary) = &self.dietary {
            if !recipe.dietary.contains(dietary) {
                return false;
            }
        }
        if let Some(favorite) = self.favorite {
            if recipe.favorite != favorite {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::Ingredient;

    fn new_recipe(title: &str, category: &str, favorite: bool) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            prep_time: 10,
            cook_time: 20,
            servings: 4,
            ingredients: vec![Ingredient::new("Flour", 2.0, "cups")],
            instructions: vec!["Mix.".to_string(), "Bake.".to_string()],
            category: category.to_string(),
            cuisine: "French".to_string(),
            dietary: vec!["Vegetarian".to_string()],
            favorite,
            rating: 0,
        }
    }

    fn empty_store() -> RecipeStore<MemoryStorage> {
        RecipeStore::open(MemoryStorage::empty()).unwrap()
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut store = empty_store();

        let a = store.add(new_recipe("A", "Dessert", false)).unwrap();
        let b = store.add(new_recipe("B", "Dessert", false)).unwrap();
        let c = store.add(new_recipe("C", "Dessert", false)).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn test_update_replaces_matching_recipe() {
        let mut store = empty_store();
        let mut recipe = store.add(new_recipe("Original", "Dessert", false)).unwrap();

        recipe.title = "Renamed".to_string();
        store.update(recipe.clone()).unwrap();

        assert_eq!(store.get(recipe.id).unwrap().title, "Renamed");
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_a_no_op() {
        let mut store = empty_store();
        store.add(new_recipe("Kept", "Dessert", false)).unwrap();

        let mut stray = store.all()[0].clone();
        stray.id = Uuid::new_v4();
        stray.title = "Stray".to_string();
        store.update(stray).unwrap();

        assert_eq!(store.all().len(), 1);
        assert_eq!(store.all()[0].title, "Kept");
    }

    #[test]
    fn test_remove_deletes_only_matching_recipe() {
        let mut store = empty_store();
        let a = store.add(new_recipe("A", "Dessert", false)).unwrap();
        let b = store.add(new_recipe("B", "Dessert", false)).unwrap();

        store.remove(a.id).unwrap();
        assert!(store.get(a.id).is_none());
        assert!(store.get(b.id).is_some());

        // Removing again is harmless.
        store.remove(a.id).unwrap();
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_toggle_favorite_flips_flag() {
        let mut store = empty_store();
        let recipe = store.add(new_recipe("A", "Dessert", false)).unwrap();

        store.toggle_favorite(recipe.id).unwrap();
        assert!(store.get(recipe.id).unwrap().favorite);

        store.toggle_favorite(recipe.id).unwrap();
        assert!(!store.get(recipe.id).unwrap().favorite);
    }

    #[test]
    fn test_set_rating_is_idempotent() {
        let mut store = empty_store();
        let recipe = store.add(new_recipe("A", "Dessert", false)).unwrap();

        store.set_rating(recipe.id, 5).unwrap();
        store.set_rating(recipe.id, 5).unwrap();
        assert_eq!(store.get(recipe.id).unwrap().rating, 5);
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let mut store = empty_store();
        store.add(new_recipe("Tarte Tatin", "Dessert", true)).unwrap();
        store.add(new_recipe("Mousse", "Dessert", false)).unwrap();
        store.add(new_recipe("Quiche", "Main Course", true)).unwrap();

        let filter = RecipeFilter {
            category: Some("Dessert".to_string()),
            favorite: Some(true),
            ..RecipeFilter::default()
        };
        let results = store.filter(&filter);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Tarte Tatin");
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let mut store = empty_store();
        store.add(new_recipe("First", "Dessert", false)).unwrap();
        store.add(new_recipe("Second", "Dessert", false)).unwrap();

        let results = store.filter(&RecipeFilter::default());
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring_on_title() {
        let mut store = empty_store();
        store.add(new_recipe("Chicken Stir Fry", "Main Course", false)).unwrap();
        store.add(new_recipe("Beef Stew", "Main Course", false)).unwrap();

        let filter = RecipeFilter {
            search: Some("CHICKEN".to_string()),
            ..RecipeFilter::default()
        };
        let results = store.filter(&filter);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Chicken Stir Fry");
    }

    #[test]
    fn test_mutations_survive_reload() {
        let storage = MemoryStorage::empty();
        let recipe_id = {
            let mut store = RecipeStore::open(&storage).unwrap();
            store.add(new_recipe("Persisted", "Dessert", false)).unwrap().id
        };

        let reopened = RecipeStore::open(&storage).unwrap();
        assert_eq!(reopened.get(recipe_id).unwrap().title, "Persisted");
    }
}
