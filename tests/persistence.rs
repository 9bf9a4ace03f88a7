//! File-backed storage round-trips and reload behavior.

use larder::{
    EntityKind, Ingredient, JsonFileStorage, MealPlanStore, MealsPatch, NewRecipe,
    NewShoppingItem, RecipeStore, ShoppingListStore, Storage,
};
use tempfile::TempDir;

fn storage_in(dir: &TempDir) -> JsonFileStorage {
    JsonFileStorage::new(dir.path().to_path_buf())
}

fn new_recipe(title: &str) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        description: "A test recipe.".to_string(),
        image: String::new(),
        prep_time: 10,
        cook_time: 30,
        servings: 4,
        ingredients: vec![
            Ingredient::new("Onion", 1.0, "whole"),
            Ingredient::new("Olive oil", 2.0, "tbsp"),
        ],
        instructions: vec!["Chop.".to_string(), "Fry.".to_string()],
        category: "Main Course".to_string(),
        cuisine: "Italian".to_string(),
        dietary: vec!["Vegan".to_string()],
        favorite: false,
        rating: 3,
    }
}

#[test]
fn missing_file_reads_as_absent() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    assert!(storage.get(EntityKind::Recipes).unwrap().is_none());
}

#[test]
fn put_then_get_round_trips() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    let value = serde_json::json!([{"name": "Milk", "amount": 1.0}]);
    storage.put(EntityKind::ShoppingLists, &value).unwrap();

    assert_eq!(storage.get(EntityKind::ShoppingLists).unwrap(), Some(value));
}

#[test]
fn collections_are_stored_independently() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    storage
        .put(EntityKind::Recipes, &serde_json::json!(["recipes"]))
        .unwrap();
    storage
        .put(EntityKind::MealPlans, &serde_json::json!(["plans"]))
        .unwrap();

    assert_eq!(
        storage.get(EntityKind::Recipes).unwrap(),
        Some(serde_json::json!(["recipes"]))
    );
    assert_eq!(
        storage.get(EntityKind::MealPlans).unwrap(),
        Some(serde_json::json!(["plans"]))
    );
}

#[test]
fn first_open_seeds_sample_data() {
    let dir = TempDir::new().unwrap();

    let store = RecipeStore::open(storage_in(&dir)).unwrap();
    assert!(!store.all().is_empty());

    // The seed was written through to disk, not just cached.
    assert!(storage_in(&dir).get(EntityKind::Recipes).unwrap().is_some());

    // Reopening sees the same collection.
    let reopened = RecipeStore::open(storage_in(&dir)).unwrap();
    assert_eq!(store.all(), reopened.all());
}

#[test]
fn recipe_mutations_survive_reopen() {
    let dir = TempDir::new().unwrap();

    let recipe_id = {
        let mut store = RecipeStore::open(storage_in(&dir)).unwrap();
        let recipe = store.add(new_recipe("Minestrone")).unwrap();
        store.toggle_favorite(recipe.id).unwrap();
        recipe.id
    };

    let store = RecipeStore::open(storage_in(&dir)).unwrap();
    let recipe = store.get(recipe_id).unwrap();
    assert_eq!(recipe.title, "Minestrone");
    assert!(recipe.favorite);
    assert_eq!(recipe.ingredients.len(), 2);
}

#[test]
fn shopping_list_merges_survive_reopen() {
    let dir = TempDir::new().unwrap();

    let list_id = {
        let mut store = ShoppingListStore::open(storage_in(&dir)).unwrap();
        let list = store
            .create_list("Groceries", vec![NewShoppingItem::new("Milk", 2.0, "gal")])
            .unwrap();
        store
            .add_items(list.id, vec![NewShoppingItem::new("milk", 1.0, "gal")])
            .unwrap();
        list.id
    };

    let store = ShoppingListStore::open(storage_in(&dir)).unwrap();
    let list = store.get(list_id).unwrap();
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].amount, 3.0);
}

#[test]
fn meal_plan_upserts_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let day = "2024-05-06".parse().unwrap();
    let dinner = uuid::Uuid::new_v4();

    {
        let mut store = MealPlanStore::open(storage_in(&dir)).unwrap();
        store
            .save_for_date(day, MealsPatch::default().with_dinner(Some(dinner)))
            .unwrap();
    }

    let store = MealPlanStore::open(storage_in(&dir)).unwrap();
    assert_eq!(store.get_for_date(day).unwrap().meals.dinner, Some(dinner));
}
