//! Entity types shared across the stores.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Image URL (not fetched or validated here).
    pub image: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub category: String,
    pub cuisine: String,
    pub dietary: Vec<String>,
    pub favorite: bool,
    /// 0 means unrated, 1-5 are star ratings.
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

/// One ingredient line within a recipe.
///
/// Names are compared case-insensitively when merging shopping list entries;
/// units are free text and only combine when the strings match exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// Input for creating a recipe. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub image: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub category: String,
    pub cuisine: String,
    pub dietary: Vec<String>,
    pub favorite: bool,
    pub rating: u8,
}

/// A shopping list with its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<ShoppingListItem>,
    pub created_at: DateTime<Utc>,
}

/// A single line on a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub checked: bool,
    /// Weak back-reference to the recipe this item came from.
    /// `None` means the item was added manually. The recipe may have been
    /// deleted since; callers must handle unresolved ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<Uuid>,
}

/// Input for adding an item to a shopping list.
/// The store assigns `id` and starts the item unchecked.
#[derive(Debug, Clone)]
pub struct NewShoppingItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub recipe_id: Option<Uuid>,
}

impl NewShoppingItem {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
            recipe_id: None,
        }
    }

    pub(crate) fn into_item(self) -> ShoppingListItem {
        ShoppingListItem {
            id: Uuid::new_v4(),
            name: self.name,
            amount: self.amount,
            unit: self.unit,
            checked: false,
            recipe_id: self.recipe_id,
        }
    }
}

/// The meals planned for one calendar day.
///
/// `date` is the natural key: there is at most one plan per date, and the
/// store upserts by date rather than by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub date: NaiveDate,
    pub meals: Meals,
}

/// Meal slots within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: &'static [MealSlot] = &[
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }
}

/// Recipe assignments for each slot of a day.
///
/// Breakfast, lunch, and dinner hold a single recipe reference; snacks hold
/// an ordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snacks: Vec<Uuid>,
}

impl Meals {
    /// All recipe ids referenced by this day, in slot order.
    pub fn recipe_ids(&self) -> Vec<Uuid> {
        let mut ids = Vec::new();
        ids.extend(self.breakfast);
        ids.extend(self.lunch);
        ids.extend(self.dinner);
        ids.extend(self.snacks.iter().copied());
        ids
    }
}

/// Partial update of a day's meals.
///
/// Populated slots overwrite the existing value for that slot only; untouched
/// slots keep whatever the plan already had.
#[derive(Debug, Clone, Default)]
pub struct MealsPatch {
    pub breakfast: Option<Option<Uuid>>,
    pub lunch: Option<Option<Uuid>>,
    pub dinner: Option<Option<Uuid>>,
    pub snacks: Option<Vec<Uuid>>,
}

impl MealsPatch {
    pub fn with_breakfast(mut self, recipe_id: Option<Uuid>) -> Self {
        self.breakfast = Some(recipe_id);
        self
    }

    pub fn with_lunch(mut self, recipe_id: Option<Uuid>) -> Self {
        self.lunch = Some(recipe_id);
        self
    }

    pub fn with_dinner(mut self, recipe_id: Option<Uuid>) -> Self {
        self.dinner = Some(recipe_id);
        self
    }

    pub fn with_snacks(mut self, recipe_ids: Vec<Uuid>) -> Self {
        self.snacks = Some(recipe_ids);
        self
    }

    /// A patch that empties the given slot.
    pub fn clearing(slot: MealSlot) -> Self {
        match slot {
            MealSlot::Breakfast => Self::default().with_breakfast(None),
            MealSlot::Lunch => Self::default().with_lunch(None),
            MealSlot::Dinner => Self::default().with_dinner(None),
            MealSlot::Snacks => Self::default().with_snacks(Vec::new()),
        }
    }

    pub(crate) fn apply(&self, meals: &mut Meals) {
        if let Some(breakfast) = self.breakfast {
            meals.breakfast = breakfast;
        }
        if let Some(lunch) = self.lunch {
            meals.lunch = lunch;
        }
        if let Some(dinner) = self.dinner {
            meals.dinner = dinner;
        }
        if let Some(snacks) = &self.snacks {
            meals.snacks = snacks.clone();
        }
    }
}
