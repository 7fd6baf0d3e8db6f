//! Case-insensitive substring search over recipes.

use crate::models::Recipe;

/// Normalize a raw search box value into the form used for matching.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Lowercased text searched for a recipe: name, description, ingredients,
/// steps and tags joined by single spaces.
pub fn haystack(recipe: &Recipe) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(
        2 + recipe.ingredients.len() + recipe.steps.len() + recipe.tags.len(),
    );
    parts.push(&recipe.name);
    parts.push(&recipe.description);
    parts.extend(recipe.ingredients.iter().map(String::as_str));
    parts.extend(recipe.steps.iter().map(String::as_str));
    parts.extend(recipe.tags.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Check whether a recipe matches a search query. A blank query matches all.
pub fn matches(recipe: &Recipe, query: &str) -> bool {
    let query = normalize_query(query);
    query.is_empty() || haystack(recipe).contains(&query)
}

/// Recipes matching the query, in collection order
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = normalize_query(query);
    if query.is_empty() {
        return recipes.iter().collect();
    }
    recipes
        .iter()
        .filter(|recipe| haystack(recipe).contains(&query))
        .collect()
}
