use recipes_core::{FileStore, RecipeBook};
use std::path::PathBuf;

/// Write the whole collection as pretty-printed JSON.
pub fn cmd_export(book: &RecipeBook<FileStore>, out: Option<PathBuf>) -> Result<(), String> {
    let json = serde_json::to_string_pretty(book.recipes())
        .map_err(|e| format!("Failed to serialize recipes: {}", e))?;

    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!("Exported {} recipes to {}", book.recipes().len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
