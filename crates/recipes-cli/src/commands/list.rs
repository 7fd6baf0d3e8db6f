use recipes_cli::summary_line;
use recipes_core::{FileStore, Recipe, RecipeBook};

fn print_listing(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }
    for recipe in recipes {
        println!("{}", summary_line(recipe));
    }
}

/// Print every recipe in collection order.
pub fn cmd_list(book: &RecipeBook<FileStore>) -> Result<(), String> {
    let all: Vec<&Recipe> = book.recipes().iter().collect();
    print_listing(&all);
    Ok(())
}

/// Print the recipes matching `query`.
pub fn cmd_search(book: &mut RecipeBook<FileStore>, query: String) -> Result<(), String> {
    book.set_search(query);
    print_listing(&book.filtered());
    Ok(())
}
