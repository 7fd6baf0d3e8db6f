//! Recipe record and identifier types.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of tags shown on a recipe card.
pub const CARD_TAG_LIMIT: usize = 3;

/// Current time at the millisecond precision recipes are stored with
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Opaque, immutable recipe identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A stored recipe
///
/// Serialized with camelCase keys and millisecond timestamps so collections
/// written by earlier builds of the browser app load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier, fixed at creation
    pub id: RecipeId,

    /// Display name, never empty once saved
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Ingredient lines, in order
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Preparation steps, in order
    #[serde(default)]
    pub steps: Vec<String>,

    /// Optional image URL
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,

    /// Free-form tags, unique ignoring case
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Image URL, if one is set
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Tags shown on the recipe card
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(CARD_TAG_LIMIT)]
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
