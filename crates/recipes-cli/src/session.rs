//! Opening the file-backed recipe book for a CLI invocation.

use recipes_core::config::load_config;
use recipes_core::{FileStore, RecipeBook, RecipeId};
use std::path::{Path, PathBuf};

/// Open the book using the config file, with `store_dir` taking precedence
/// over the configured storage directory.
pub fn open_book(
    config_path: Option<&Path>,
    store_dir: Option<PathBuf>,
) -> Result<RecipeBook<FileStore>, String> {
    let handle = load_config(config_path);
    match &handle.source {
        Some(source) => log::info!("Loaded config from {}", source.display()),
        None => log::info!("No config file found; using built-in defaults"),
    }
    for warning in &handle.warnings {
        log::warn!("{}", warning);
    }

    let dir = store_dir.unwrap_or_else(|| handle.config.resolved_storage_dir());
    let store = FileStore::new(&dir);
    let path = store
        .slot_path(&handle.config.storage_key)
        .map_err(|e| e.to_string())?;
    log::debug!("Using recipe store {}", path.display());

    Ok(RecipeBook::open_with_key(store, &handle.config.storage_key))
}

/// Resolve a full id or a unique id prefix to a recipe id
pub fn resolve_id<S: recipes_core::KeyValueStore>(
    book: &RecipeBook<S>,
    query: &str,
) -> Result<RecipeId, String> {
    let query = query.trim();
    if query.is_empty() {
        return Err("Recipe id cannot be empty".to_string());
    }

    if let Some(recipe) = book.recipes().iter().find(|r| r.id.as_str() == query) {
        return Ok(recipe.id.clone());
    }

    let mut found = book
        .recipes()
        .iter()
        .filter(|r| r.id.as_str().starts_with(query));
    match (found.next(), found.next()) {
        (Some(recipe), None) => Ok(recipe.id.clone()),
        (Some(_), Some(_)) => Err(format!("Recipe id '{}' is ambiguous", query)),
        (None, _) => Err(format!("Recipe not found: {}", query)),
    }
}
