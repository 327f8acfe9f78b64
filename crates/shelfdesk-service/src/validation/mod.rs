//! Input validation for product and category payloads.
//!
//! Each entity has a payload type (raw, as received) and a validation
//! function that returns either the typed record or every field failure
//! at once as an [`AppError`] of kind `Validation`.

pub mod category;
pub mod coerce;
pub mod product;

pub use category::{CategoryPayload, validate_category};
pub use product::{ProductPayload, validate_product};

use shelfdesk_core::error::FieldError;
use validator::ValidationErrors;

/// Append the derive-level failures for `field` under its wire name.
fn push_derived(
    fields: &mut Vec<FieldError>,
    errors: Option<&ValidationErrors>,
    field: &str,
    wire_name: &str,
) {
    let Some(errors) = errors else {
        return;
    };
    if let Some(list) = errors.field_errors().get(field) {
        for err in list.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {wire_name}"));
            fields.push(FieldError::new(wire_name, message));
        }
    }
}

/// Treat empty and whitespace-only strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
