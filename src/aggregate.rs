//! Derive a shopping list from a week of meal plans.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::StorageError;
use crate::meal_plans::{self, MealPlanStore};
use crate::recipes::RecipeStore;
use crate::shopping_list::ShoppingListStore;
use crate::storage::Storage;
use crate::types::{NewShoppingItem, ShoppingList};

/// Build a shopping list covering the Monday-starting week around `anchor`
/// (default: today).
///
/// Every recipe referenced by the week's plans contributes its ingredients
/// once, regardless of how many slots reference it. Ingredients merge by
/// case-insensitive name plus exact unit, summing amounts; the first-seen
/// entry keeps its recipe back-reference. References to deleted recipes are
/// dropped.
///
/// Reads the recipe and meal plan stores, writes a brand-new list through the
/// shopping list store.
pub fn shopping_list_for_week<S: Storage>(
    recipes: &RecipeStore<S>,
    meal_plans: &MealPlanStore<S>,
    shopping: &mut ShoppingListStore<S>,
    anchor: Option<NaiveDate>,
) -> Result<ShoppingList, StorageError> {
    let week = meal_plans::week_dates(anchor);
    let plans = meal_plans.for_range(week[0], week[6]);

    // Unique recipe ids across every slot of every plan, first-seen order.
    let mut recipe_ids: Vec<Uuid> = Vec::new();
    for plan in &plans {
        for id in plan.meals.recipe_ids() {
            if !recipe_ids.contains(&id) {
                recipe_ids.push(id);
            }
        }
    }

    let mut merged: Vec<NewShoppingItem> = Vec::new();
    for id in recipe_ids {
        let Some(recipe) = recipes.get(id) else {
            tracing::warn!(recipe_id = %id, "planned recipe no longer exists, skipping");
            continue;
        };

        for ingredient in &recipe.ingredients {
            let key = ingredient.name.to_lowercase();
            let existing = merged
                .iter_mut()
                .find(|item| item.name.to_lowercase() == key && item.unit == ingredient.unit);

            match existing {
                Some(item) => item.amount += ingredient.amount,
                None => merged.push(NewShoppingItem {
                    name: ingredient.name.clone(),
                    amount: ingredient.amount,
                    unit: ingredient.unit.clone(),
                    recipe_id: Some(recipe.id),
                }),
            }
        }
    }

    let name = format!("Meal Plan: {} to {}", week[0], week[6]);
    shopping.create_list(name, merged)
}
