//! Sample data written to storage on first use.
//!
//! The dataset is built once per process so the meal plans keep referencing
//! the same recipe ids that the recipe collection was seeded with.

use std::sync::LazyLock;

use chrono::{Days, Duration, Utc};
use uuid::Uuid;

use crate::types::{Ingredient, MealPlan, Meals, Recipe, ShoppingList, ShoppingListItem};

struct SeedData {
    recipes: Vec<Recipe>,
    shopping_lists: Vec<ShoppingList>,
    meal_plans: Vec<MealPlan>,
}

static SAMPLE: LazyLock<SeedData> = LazyLock::new(build_sample);

pub fn recipes() -> Vec<Recipe> {
    SAMPLE.recipes.clone()
}

pub fn shopping_lists() -> Vec<ShoppingList> {
    SAMPLE.shopping_lists.clone()
}

pub fn meal_plans() -> Vec<MealPlan> {
    SAMPLE.meal_plans.clone()
}

fn build_sample() -> SeedData {
    let now = Utc::now();

    let pasta = Recipe {
        id: Uuid::new_v4(),
        title: "Creamy Garlic Pasta".to_string(),
        description: "A delicious and creamy pasta dish with lots of garlic flavor.".to_string(),
        image: "https://images.pexels.com/photos/1527603/pexels-photo-1527603.jpeg".to_string(),
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        ingredients: vec![
            Ingredient::new("Fettuccine pasta", 8.0, "oz"),
            Ingredient::new("Butter", 2.0, "tbsp"),
            Ingredient::new("Garlic cloves", 4.0, "cloves"),
            Ingredient::new("Heavy cream", 1.0, "cup"),
            Ingredient::new("Parmesan cheese", 1.0, "cup"),
            Ingredient::new("Salt", 1.0, "tsp"),
            Ingredient::new("Black pepper", 0.5, "tsp"),
        ],
        instructions: vec![
            "Cook pasta according to package instructions.".to_string(),
            "In a large skillet, melt butter over medium heat.".to_string(),
            "Add minced garlic and sauté until fragrant, about 1 minute.".to_string(),
            "Pour in heavy cream and bring to a simmer.".to_string(),
            "Add grated Parmesan cheese and stir until melted and sauce thickens.".to_string(),
            "Season with salt and pepper to taste.".to_string(),
            "Add cooked pasta to the sauce and toss to coat.".to_string(),
            "Serve hot with additional Parmesan cheese if desired.".to_string(),
        ],
        category: "Main Course".to_string(),
        cuisine: "Italian".to_string(),
        dietary: vec!["Vegetarian".to_string()],
        favorite: true,
        rating: 4,
        created_at: now,
    };

    let avocado_toast = Recipe {
        id: Uuid::new_v4(),
        title: "Avocado Toast".to_string(),
        description: "Simple and nutritious breakfast with creamy avocado on crunchy toast."
            .to_string(),
        image: "https://images.pexels.com/photos/1351238/pexels-photo-1351238.jpeg".to_string(),
        prep_time: 5,
        cook_time: 3,
        servings: 1,
        ingredients: vec![
            Ingredient::new("Bread", 2.0, "slices"),
            Ingredient::new("Avocado", 1.0, "whole"),
            Ingredient::new("Lemon juice", 1.0, "tsp"),
            Ingredient::new("Salt", 1.0, "pinch"),
            Ingredient::new("Red pepper flakes", 1.0, "pinch"),
        ],
        instructions: vec![
            "Toast bread to desired crispness.".to_string(),
            "Cut avocado in half, remove pit, and scoop out flesh into a bowl.".to_string(),
            "Add lemon juice and salt, then mash with a fork to desired consistency.".to_string(),
            "Spread avocado mixture on toast.".to_string(),
            "Sprinkle with red pepper flakes.".to_string(),
        ],
        category: "Breakfast".to_string(),
        cuisine: "California".to_string(),
        dietary: vec!["Vegetarian".to_string(), "Vegan".to_string()],
        favorite: false,
        rating: 5,
        created_at: now - Duration::days(1),
    };

    let stir_fry = Recipe {
        id: Uuid::new_v4(),
        title: "Chicken Stir Fry".to_string(),
        description: "Quick and healthy stir fry with chicken and colorful vegetables.".to_string(),
        image: "https://images.pexels.com/photos/2611917/pexels-photo-2611917.jpeg".to_string(),
        prep_time: 15,
        cook_time: 10,
        servings: 4,
        ingredients: vec![
            Ingredient::new("Chicken breast", 1.0, "lb"),
            Ingredient::new("Bell peppers", 2.0, "whole"),
            Ingredient::new("Broccoli", 2.0, "cups"),
            Ingredient::new("Carrots", 2.0, "whole"),
            Ingredient::new("Soy sauce", 3.0, "tbsp"),
            Ingredient::new("Garlic", 2.0, "cloves"),
            Ingredient::new("Ginger", 1.0, "tbsp"),
            Ingredient::new("Vegetable oil", 2.0, "tbsp"),
        ],
        instructions: vec![
            "Slice chicken breast into thin strips.".to_string(),
            "Chop all vegetables into bite-sized pieces.".to_string(),
            "Heat oil in a wok or large skillet over high heat.".to_string(),
            "Add chicken and cook until no longer pink, about 4-5 minutes.".to_string(),
            "Remove chicken and set aside.".to_string(),
            "Add vegetables, garlic, and ginger to the pan and stir-fry for 3-4 minutes."
                .to_string(),
            "Return chicken to the pan and add soy sauce.".to_string(),
            "Stir well and cook for another 2 minutes.".to_string(),
            "Serve hot over rice or noodles.".to_string(),
        ],
        category: "Main Course".to_string(),
        cuisine: "Asian".to_string(),
        dietary: vec!["High Protein".to_string()],
        favorite: true,
        rating: 4,
        created_at: now - Duration::days(2),
    };

    let groceries = ShoppingList {
        id: Uuid::new_v4(),
        name: "Weekly Groceries".to_string(),
        items: vec![
            seed_item("Milk", 1.0, "gallon", false),
            seed_item("Eggs", 12.0, "count", true),
            seed_item("Bread", 1.0, "loaf", false),
            seed_item("Chicken breast", 2.0, "lbs", false),
        ],
        created_at: now,
    };

    let today = now.date_naive();
    let meal_plans = vec![
        MealPlan {
            id: Uuid::new_v4(),
            date: today,
            meals: Meals {
                breakfast: Some(avocado_toast.id),
                dinner: Some(pasta.id),
                ..Meals::default()
            },
        },
        MealPlan {
            id: Uuid::new_v4(),
            date: today + Days::new(1),
            meals: Meals {
                lunch: Some(stir_fry.id),
                dinner: Some(pasta.id),
                ..Meals::default()
            },
        },
    ];

    SeedData {
        recipes: vec![pasta, avocado_toast, stir_fry],
        shopping_lists: vec![groceries],
        meal_plans,
    }
}

fn seed_item(name: &str, amount: f64, unit: &str, checked: bool) -> ShoppingListItem {
    ShoppingListItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
        checked,
        recipe_id: None,
    }
}
