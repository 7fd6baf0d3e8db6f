//! Raw form values and the rules that turn them into a [`Recipe`].

use super::{Recipe, RecipeId};
use crate::error::{RecipeError, Result};
use chrono::{DateTime, Utc};

/// Unvalidated recipe form contents
///
/// Ingredients and steps hold one entry per line; tags are comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub ingredients: String,
    pub steps: String,
    pub tags: String,
}

impl RecipeDraft {
    /// Pre-fill a draft from an existing recipe for editing
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.join("\n"),
            steps: recipe.steps.join("\n"),
            tags: recipe.tags.join(", "),
        }
    }

    /// Check the draft can be saved. Only the name is required.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RecipeError::EmptyName);
        }
        Ok(())
    }

    /// Build the recipe to store.
    ///
    /// When `existing` is given its id and creation time carry over and the
    /// result replaces it; otherwise a new id is generated.
    pub fn into_recipe(self, existing: Option<&Recipe>, now: DateTime<Utc>) -> Result<Recipe> {
        self.validate()?;

        let image = self.image.trim();
        let (id, created_at) = match existing {
            Some(recipe) => (recipe.id.clone(), recipe.created_at),
            None => (RecipeId::generate(), now),
        };

        Ok(Recipe {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            ingredients: split_lines(&self.ingredients),
            steps: split_lines(&self.steps),
            image: (!image.is_empty()).then(|| image.to_string()),
            tags: split_tags(&self.tags),
            created_at,
            updated_at: now,
        })
    }
}

/// Split text into trimmed, non-empty lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split comma separated tags, dropping blanks and case-insensitive repeats
pub fn split_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let lower = tag.to_lowercase();
        if !tags.iter().any(|t| t.to_lowercase() == lower) {
            tags.push(tag.to_string());
        }
    }
    tags
}
