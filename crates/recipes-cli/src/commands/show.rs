use recipes_cli::{detail, resolve_id};
use recipes_core::{FileStore, RecipeBook};

/// Print one recipe in full.
pub fn cmd_show(book: &mut RecipeBook<FileStore>, id: &str) -> Result<(), String> {
    let id = resolve_id(book, id)?;
    let recipe = book.open_view(&id).map_err(|e| e.to_string())?;
    print!("{}", detail(recipe));
    Ok(())
}
