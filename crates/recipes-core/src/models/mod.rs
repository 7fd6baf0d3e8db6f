//! Data models for Ocean Recipes
//!
//! The persisted recipe record and the raw form draft it is built from.

mod draft;
mod recipe;

#[cfg(test)]
mod tests;

pub use draft::{split_lines, split_tags, RecipeDraft};
pub use recipe::{timestamp_now, Recipe, RecipeId, CARD_TAG_LIMIT};
