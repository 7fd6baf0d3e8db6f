use recipes_cli::{resolve_id, summary_line};
use recipes_core::{FileStore, RecipeBook};

/// Delete a recipe. Without `yes` only the confirmation prompt is shown.
pub fn cmd_delete(book: &mut RecipeBook<FileStore>, id: &str, yes: bool) -> Result<(), String> {
    let id = resolve_id(book, id)?;
    book.open_view(&id).map_err(|e| e.to_string())?;
    book.open_delete().map_err(|e| e.to_string())?;

    if !yes {
        if let Some(recipe) = book.selected() {
            println!("Delete Recipe?  {}", summary_line(recipe));
        }
        println!("This action cannot be undone. The recipe will be permanently removed.");
        println!("Re-run with --yes to delete.");
        book.back_to_view();
        return Ok(());
    }

    let removed = book.confirm_delete().map_err(|e| e.to_string())?;
    println!("Deleted recipe {} ({})", removed.name, removed.id);
    Ok(())
}
