//! Category payload validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use shelfdesk_core::error::AppError;
use shelfdesk_core::result::AppResult;
use shelfdesk_entity::category::NewCategory;

use super::push_derived;

/// A category payload as submitted by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPayload {
    /// Display name; surrounding whitespace is ignored.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Validate)]
struct CategoryDraft {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    name: String,
}

/// Validate a category payload into a [`NewCategory`] with its slug.
pub fn validate_category(payload: CategoryPayload) -> AppResult<NewCategory> {
    let draft = CategoryDraft {
        name: payload.name.unwrap_or_default().trim().to_string(),
    };

    if let Err(errors) = draft.validate() {
        let mut fields = Vec::new();
        push_derived(&mut fields, Some(&errors), "name", "name");
        return Err(AppError::invalid_fields(fields));
    }

    Ok(NewCategory::new(
        draft.name,
        payload.description.unwrap_or_default(),
    ))
}
