use recipes_cli::{detail, RecipeFields};
use recipes_core::{FileStore, RecipeBook};

/// Create a recipe from the given flags.
pub fn cmd_add(book: &mut RecipeBook<FileStore>, fields: RecipeFields) -> Result<(), String> {
    book.open_create();
    let recipe = book
        .save_new(fields.into_draft())
        .map_err(|e| e.to_string())?;

    println!("Created recipe {}\n", recipe.id);
    print!("{}", detail(recipe));
    Ok(())
}
