//! Tests for recipe and draft types.

use super::*;
use crate::error::RecipeError;
use chrono::{TimeZone, Utc};

fn sample_recipe() -> Recipe {
    let created = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
    Recipe {
        id: RecipeId::from("abc1234"),
        name: "Pancakes".to_string(),
        description: "Fluffy".to_string(),
        ingredients: vec!["2 eggs".to_string(), "1 cup flour".to_string()],
        steps: vec!["Mix".to_string(), "Fry".to_string()],
        image: Some("https://example.com/p.jpg".to_string()),
        tags: vec!["Breakfast".to_string(), "Sweet".to_string()],
        created_at: created,
        updated_at: created,
    }
}

// ========================================================================
// Recipe Tests
// ========================================================================

#[test]
fn test_recipe_id_generate_unique() {
    let a = RecipeId::generate();
    let b = RecipeId::generate();

    assert_ne!(a, b);
    assert!(!a.as_str().is_empty());
}

#[test]
fn test_recipe_serializes_camel_case_millis() {
    let recipe = sample_recipe();
    let json = serde_json::to_value(&recipe).unwrap();

    assert_eq!(json["id"], "abc1234");
    assert_eq!(json["createdAt"], recipe.created_at.timestamp_millis());
    assert_eq!(json["updatedAt"], recipe.updated_at.timestamp_millis());
    assert!(json.get("created_at").is_none());
}

#[test]
fn test_recipe_reads_browser_format() {
    let json = r#"{
        "id": "k3j9x0q",
        "name": "Creamy Tomato Pasta",
        "description": "Silky tomato cream sauce.",
        "ingredients": ["200g pasta"],
        "steps": ["Cook pasta until al dente."],
        "image": "",
        "createdAt": 1700000000000,
        "updatedAt": 1700000500000,
        "tags": ["Pasta"]
    }"#;

    let recipe: Recipe = serde_json::from_str(json).unwrap();

    assert_eq!(recipe.id.as_str(), "k3j9x0q");
    assert_eq!(recipe.image, None);
    assert_eq!(recipe.created_at.timestamp_millis(), 1_700_000_000_000);
    assert_eq!(recipe.updated_at.timestamp_millis(), 1_700_000_500_000);
}

#[test]
fn test_recipe_missing_optional_fields_default() {
    let json = r#"{"id":"x","name":"Toast","createdAt":0,"updatedAt":0}"#;
    let recipe: Recipe = serde_json::from_str(json).unwrap();

    assert!(recipe.description.is_empty());
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.steps.is_empty());
    assert!(recipe.tags.is_empty());
    assert!(recipe.image_url().is_none());
}

#[test]
fn test_card_tags_limited() {
    let mut recipe = sample_recipe();
    recipe.tags = ["a", "b", "c", "d"].iter().map(|t| t.to_string()).collect();

    assert_eq!(recipe.card_tags().len(), CARD_TAG_LIMIT);
    assert_eq!(recipe.card_tags()[2], "c");

    recipe.tags.truncate(1);
    assert_eq!(recipe.card_tags().len(), 1);
}

// ========================================================================
// RecipeDraft Tests
// ========================================================================

#[test]
fn test_draft_rejects_blank_name() {
    let draft = RecipeDraft {
        name: "   ".to_string(),
        ..Default::default()
    };

    assert!(matches!(draft.validate(), Err(RecipeError::EmptyName)));
    assert!(matches!(
        draft.into_recipe(None, Utc::now()),
        Err(RecipeError::EmptyName)
    ));
}

#[test]
fn test_draft_into_new_recipe_trims_and_splits() {
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let draft = RecipeDraft {
        name: "  Classic Pancakes ".to_string(),
        description: " Sunday breakfast ".to_string(),
        image: "   ".to_string(),
        ingredients: "2 eggs\n\n  1 cup flour \r\n".to_string(),
        steps: "Mix\nCook on medium heat".to_string(),
        tags: "Breakfast, , Quick,Sweet".to_string(),
    };

    let recipe = draft.into_recipe(None, now).unwrap();

    assert_eq!(recipe.name, "Classic Pancakes");
    assert_eq!(recipe.description, "Sunday breakfast");
    assert_eq!(recipe.ingredients, vec!["2 eggs", "1 cup flour"]);
    assert_eq!(recipe.steps, vec!["Mix", "Cook on medium heat"]);
    assert_eq!(recipe.tags, vec!["Breakfast", "Quick", "Sweet"]);
    assert_eq!(recipe.image, None);
    assert_eq!(recipe.created_at, now);
    assert_eq!(recipe.updated_at, now);
}

#[test]
fn test_draft_accepts_any_image_text() {
    for image in ["example.com/a.jpg", "photos/stew.png", "not a url"] {
        let draft = RecipeDraft {
            name: "Stew".to_string(),
            image: image.to_string(),
            ..Default::default()
        };

        assert!(draft.validate().is_ok());
        let recipe = draft.into_recipe(None, Utc::now()).unwrap();
        assert_eq!(recipe.image_url(), Some(image));
    }
}

#[test]
fn test_draft_into_existing_keeps_identity() {
    let existing = sample_recipe();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let mut draft = RecipeDraft::from_recipe(&existing);
    draft.name = "Buttermilk Pancakes".to_string();

    let updated = draft.into_recipe(Some(&existing), now).unwrap();

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.created_at, existing.created_at);
    assert_eq!(updated.updated_at, now);
    assert_eq!(updated.name, "Buttermilk Pancakes");
    assert_eq!(updated.ingredients, existing.ingredients);
    assert_eq!(updated.tags, existing.tags);
    assert_eq!(updated.image, existing.image);
}

#[test]
fn test_draft_from_recipe_joins_fields() {
    let draft = RecipeDraft::from_recipe(&sample_recipe());

    assert_eq!(draft.ingredients, "2 eggs\n1 cup flour");
    assert_eq!(draft.steps, "Mix\nFry");
    assert_eq!(draft.tags, "Breakfast, Sweet");
    assert_eq!(draft.image, "https://example.com/p.jpg");
}

#[test]
fn test_split_tags_dedupes_ignoring_case() {
    assert_eq!(split_tags("Pasta, pasta, PASTA, Quick"), vec!["Pasta", "Quick"]);
    assert!(split_tags(" , ,").is_empty());
}

#[test]
fn test_split_lines_drops_blank_lines() {
    assert_eq!(split_lines("a\n \n b "), vec!["a", "b"]);
    assert!(split_lines("").is_empty());
}
