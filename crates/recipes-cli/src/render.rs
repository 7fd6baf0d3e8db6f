//! Plain-text rendering of recipes for the terminal.

use chrono::{DateTime, Utc};
use recipes_core::{Recipe, RecipeId};
use std::fmt::Write;

/// Length of the id prefix shown in listings
pub const SHORT_ID_LEN: usize = 8;

/// Leading part of an id, enough to pick a recipe in practice
pub fn short_id(id: &RecipeId) -> &str {
    let s = id.as_str();
    match s.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// One listing line: short id, name and card tags
pub fn summary_line(recipe: &Recipe) -> String {
    let mut line = format!("{:<width$}  {}", short_id(&recipe.id), recipe.name, width = SHORT_ID_LEN);
    if !recipe.card_tags().is_empty() {
        let _ = write!(line, "  [{}]", recipe.card_tags().join(", "));
    }
    line
}

/// Full detail view
pub fn detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.name);
    if !recipe.description.is_empty() {
        let _ = writeln!(out, "{}", recipe.description);
    }

    let _ = writeln!(out, "\nIngredients");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  - {}", ingredient);
    }

    let _ = writeln!(out, "\nSteps");
    for (idx, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", idx + 1, step);
    }

    out.push('\n');
    if !recipe.tags.is_empty() {
        let _ = writeln!(out, "Tags:    {}", recipe.tags.join(", "));
    }
    if let Some(image) = recipe.image_url() {
        let _ = writeln!(out, "Image:   {}", image);
    }
    let _ = writeln!(out, "Created: {}", format_timestamp(&recipe.created_at));
    let _ = writeln!(out, "Updated: {}", format_timestamp(&recipe.updated_at));
    let _ = writeln!(out, "Id:      {}", recipe.id);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn recipe() -> Recipe {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap();
        Recipe {
            id: RecipeId::from("0123456789abcdef"),
            name: "Shakshuka".to_string(),
            description: "Eggs poached in spiced tomato".to_string(),
            ingredients: vec!["4 eggs".to_string(), "1 can tomatoes".to_string()],
            steps: vec!["Simmer sauce".to_string(), "Crack in eggs".to_string()],
            image: None,
            tags: ["Brunch", "Eggs", "Spicy", "One-pan"].iter().map(|t| t.to_string()).collect(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id(&RecipeId::from("0123456789abcdef")), "01234567");
        assert_eq!(short_id(&RecipeId::from("abc")), "abc");
    }

    #[test]
    fn test_summary_line_shows_three_tags() {
        let line = summary_line(&recipe());

        assert_eq!(line, "01234567  Shakshuka  [Brunch, Eggs, Spicy]");
    }

    #[test]
    fn test_detail_numbers_steps() {
        let text = detail(&recipe());

        assert!(text.starts_with("Shakshuka\nEggs poached in spiced tomato\n"));
        assert!(text.contains("  - 4 eggs\n"));
        assert!(text.contains("  1. Simmer sauce\n  2. Crack in eggs\n"));
        assert!(text.contains("Tags:    Brunch, Eggs, Spicy, One-pan\n"));
        assert!(text.contains("Created: 2024-03-09 18:30 UTC\n"));
        assert!(!text.contains("Image:"));
    }
}
