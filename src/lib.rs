pub mod aggregate;
pub mod error;
pub mod meal_plans;
pub mod recipes;
pub mod seed;
pub mod shopping_list;
pub mod storage;
pub mod types;

pub use aggregate::shopping_list_for_week;
pub use error::StorageError;
pub use meal_plans::{week_dates, MealPlanStore};
pub use recipes::{RecipeFilter, RecipeStore};
pub use shopping_list::ShoppingListStore;
pub use storage::{EntityKind, JsonFileStorage, MemoryStorage, Storage};
pub use types::{
    Ingredient, MealPlan, MealSlot, Meals, MealsPatch, NewRecipe, NewShoppingItem, Recipe,
    ShoppingList, ShoppingListItem,
};
