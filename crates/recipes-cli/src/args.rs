//! Recipe field flags shared by `add` and `edit`.

use clap::Args;
use recipes_core::RecipeDraft;

#[derive(Args, Debug, Clone, Default)]
pub struct RecipeFields {
    /// Recipe name (required when adding)
    #[arg(short, long, value_name = "TEXT")]
    pub name: Option<String>,

    /// Short description
    #[arg(short, long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Image URL
    #[arg(long, value_name = "URL")]
    pub image: Option<String>,

    /// Ingredient line (repeat for each ingredient; replaces the whole list)
    #[arg(short, long = "ingredient", value_name = "TEXT")]
    pub ingredients: Vec<String>,

    /// Step line (repeat for each step; replaces the whole list)
    #[arg(short, long = "step", value_name = "TEXT")]
    pub steps: Vec<String>,

    /// Comma separated tags, e.g. "Breakfast, Quick"
    #[arg(short, long, value_name = "TAGS")]
    pub tags: Option<String>,
}

impl RecipeFields {
    /// Draft for a brand new recipe
    pub fn into_draft(self) -> RecipeDraft {
        self.apply_to(RecipeDraft::default())
    }

    /// Overlay the given flags on an existing draft, keeping fields that
    /// were not passed.
    pub fn apply_to(self, mut draft: RecipeDraft) -> RecipeDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(image) = self.image {
            draft.image = image;
        }
        if !self.ingredients.is_empty() {
            draft.ingredients = self.ingredients.join("\n");
        }
        if !self.steps.is_empty() {
            draft.steps = self.steps.join("\n");
        }
        if let Some(tags) = self.tags {
            draft.tags = tags;
        }
        draft
    }

    /// True when no field flag was given
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.ingredients.is_empty()
            && self.steps.is_empty()
            && self.tags.is_none()
    }
}
