//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::slug::slugify;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Display name, unique across categories.
    pub name: String,
    /// URL-safe form of the name.
    #[serde(default)]
    pub slug: Option<String>,
    /// Free-text description, empty when not supplied.
    #[serde(default)]
    pub description: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Validated data for creating or replacing a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    /// Display name.
    pub name: String,
    /// Slug derived from the name.
    pub slug: Option<String>,
    /// Description.
    pub description: String,
}

impl NewCategory {
    /// Build a new category, deriving the slug from the name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            slug: slugify(&name),
            name,
            description: description.into(),
        }
    }
}
