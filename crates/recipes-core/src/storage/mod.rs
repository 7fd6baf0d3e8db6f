//! Key-value persistence for the recipe collection
//!
//! The whole collection lives in one slot of a key-value store as a JSON
//! array. Front ends supply the store: a file per key for the CLI, the
//! browser's `localStorage` for the web app, an in-memory map for tests.

mod file;
mod memory;


pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::{RecipeError, Result};
use crate::models::{timestamp_now, Recipe};
use crate::seed;

/// Slot holding the serialized collection
pub const STORAGE_KEY: &str = "recipe_manager_items_v1";

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Read a slot. A slot that was never written is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Validate a storage key so it can double as a file name.
/// Rejects empty keys, path separators, "..", leading dots and null bytes.
pub fn validate_key(key: &str) -> Result<()> {
    let problem = if key.is_empty() {
        Some("key cannot be empty")
    } else if key.contains('/') || key.contains('\\') {
        Some("key cannot contain path separators")
    } else if key.contains("..") {
        Some("key cannot contain '..'")
    } else if key.starts_with('.') {
        Some("key cannot start with '.'")
    } else if key.contains('\0') {
        Some("key cannot contain null bytes")
    } else {
        None
    };

    match problem {
        Some(msg) => Err(RecipeError::Storage(format!("Invalid storage key '{}': {}", key, msg))),
        None => Ok(()),
    }
}

/// Load the collection from `key`.
///
/// A missing or unreadable slot, or one that is not a JSON array, is replaced
/// by the demo seed, which is written back before being returned. Records in
/// an array that do not form a valid recipe are skipped and the slot is left
/// untouched.
pub fn load_recipes<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> Vec<Recipe> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(records) => {
                let recipes = parse_records(records, key);
                log::debug!("Loaded {} recipes from '{}'", recipes.len(), key);
                return recipes;
            }
            Err(e) => log::warn!("Discarding malformed recipe data in '{}': {}", key, e),
        },
        Ok(None) => {}
        Err(e) => log::warn!("Failed to read recipe data from '{}': {}", key, e),
    }

    let demo = seed::demo_recipes(timestamp_now());
    log::info!("Seeding {} demo recipes into '{}'", demo.len(), key);
    if let Err(e) = save_recipes(store, key, &demo) {
        log::warn!("Failed to persist demo recipes: {}", e);
    }
    demo
}

fn parse_records(records: Vec<serde_json::Value>, key: &str) -> Vec<Recipe> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Recipe>(record) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                log::warn!("Skipping invalid recipe #{} in '{}': {}", index, key, e);
                None
            }
        })
        .collect()
}

/// Serialize the whole collection into `key`
pub fn save_recipes<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    recipes: &[Recipe],
) -> Result<()> {
    let json = serde_json::to_string(recipes)?;
    store.set(key, &json)?;
    log::debug!("Saved {} recipes to '{}'", recipes.len(), key);
    Ok(())
}
