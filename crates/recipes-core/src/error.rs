//! Error type shared by every recipes-core operation.

use crate::models::RecipeId;

/// Message shown inline by the recipe form when the name is missing.
pub const NAME_REQUIRED: &str = "Name is required.";

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("Name is required.")]
    EmptyName,

    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),

    #[error("No recipe is selected")]
    NoSelection,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
