//! Recipes Core Library
//!
//! Recipe model, form drafts, search, persistence and the root application
//! state shared by the web and command-line front ends.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod seed;
pub mod storage;

// Re-export commonly used types
pub use app::{Modal, RecipeBook};
pub use error::{RecipeError, Result};
pub use models::{Recipe, RecipeDraft, RecipeId};
pub use storage::{FileStore, KeyValueStore, MemoryStore, STORAGE_KEY};
