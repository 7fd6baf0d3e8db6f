//! Demo recipes shipped with the application
//!
//! The seed is embedded at compile time so the browser build can populate an
//! empty store without any file system access.

use crate::models::{Recipe, RecipeId};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Deserialize;

const DEMO_RECIPES_JSON: &str = include_str!("../data/demo_recipes.json");

/// Recipe content without identity or timestamps
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
}

/// Parsed demo recipes
pub static DEMO_RECIPES: Lazy<Vec<SeedRecipe>> = Lazy::new(|| {
    match serde_json::from_str(DEMO_RECIPES_JSON) {
        Ok(recipes) => recipes,
        Err(e) => {
            log::warn!("Failed to parse embedded demo recipes: {}", e);
            Vec::new()
        }
    }
});

/// Materialize the demo recipes with fresh ids, stamped at `now`
pub fn demo_recipes(now: DateTime<Utc>) -> Vec<Recipe> {
    DEMO_RECIPES
        .iter()
        .map(|seed| Recipe {
            id: RecipeId::generate(),
            name: seed.name.clone(),
            description: seed.description.clone(),
            ingredients: seed.ingredients.clone(),
            steps: seed.steps.clone(),
            image: None,
            tags: seed.tags.clone(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_recipes_load() {
        assert_eq!(DEMO_RECIPES.len(), 2, "Should ship exactly two demo recipes");
    }

    #[test]
    fn test_demo_recipes_materialize() {
        let now = Utc::now();
        let recipes = demo_recipes(now);

        assert_eq!(recipes[0].name, "Lemon Herb Grilled Chicken");
        assert_eq!(recipes[1].name, "Creamy Tomato Pasta");
        assert_ne!(recipes[0].id, recipes[1].id);
        assert!(recipes.iter().all(|r| r.created_at == now && r.updated_at == now));
        assert_eq!(recipes[1].tags, vec!["Pasta", "Vegetarian", "Creamy"]);
    }

    #[test]
    fn test_demo_ids_fresh_per_call() {
        let first = demo_recipes(Utc::now());
        let second = demo_recipes(Utc::now());

        assert_ne!(first[0].id, second[0].id);
    }
}
