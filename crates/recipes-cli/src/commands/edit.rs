use recipes_cli::{detail, resolve_id, RecipeFields};
use recipes_core::{FileStore, RecipeBook, RecipeDraft};

/// Update the given fields of a recipe, keeping the rest.
pub fn cmd_edit(
    book: &mut RecipeBook<FileStore>,
    id: &str,
    fields: RecipeFields,
) -> Result<(), String> {
    if fields.is_empty() {
        return Err("Nothing to change; pass at least one field flag".to_string());
    }

    let id = resolve_id(book, id)?;
    let current = book.open_view(&id).map_err(|e| e.to_string())?;
    let draft = fields.apply_to(RecipeDraft::from_recipe(current));

    book.open_edit().map_err(|e| e.to_string())?;
    let recipe = book.save_edit(draft).map_err(|e| e.to_string())?;

    println!("Updated recipe {}\n", recipe.id);
    print!("{}", detail(recipe));
    Ok(())
}
