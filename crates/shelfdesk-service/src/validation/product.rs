//! Product payload validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use shelfdesk_core::error::{AppError, FieldError};
use shelfdesk_core::result::AppResult;
use shelfdesk_entity::product::NewProduct;

use super::{coerce, non_empty, push_derived};

/// Largest price a NUMERIC(12, 2) column holds.
const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// A product payload as submitted by a client.
///
/// `price` and `stock` stay untyped until validation so numeric strings
/// can be coerced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Price as a number or numeric string.
    #[serde(default)]
    pub price: Option<Value>,
    /// Stock as a number or numeric string.
    #[serde(default)]
    pub stock: Option<Value>,
    /// Image URL; empty means none.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Category id; empty means none.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Validate)]
struct ProductDraft {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    name: String,
    #[validate(url(message = "Invalid image URL"))]
    image_url: Option<String>,
}

/// Validate a product payload into a [`NewProduct`].
///
/// Failures are reported in field order: name, price, stock, imageUrl,
/// category.
pub fn validate_product(payload: ProductPayload) -> AppResult<NewProduct> {
    let draft = ProductDraft {
        name: payload.name.unwrap_or_default(),
        image_url: non_empty(payload.image_url),
    };
    let derived = draft.validate().err();

    let mut fields = Vec::new();
    push_derived(&mut fields, derived.as_ref(), "name", "name");
    let price = check_price(payload.price.as_ref(), &mut fields);
    let stock = check_stock(payload.stock.as_ref(), &mut fields);
    push_derived(&mut fields, derived.as_ref(), "image_url", "imageUrl");
    let category_id = check_category(non_empty(payload.category), &mut fields);

    match (price, stock) {
        (Some(price), Some(stock)) if fields.is_empty() => Ok(NewProduct {
            name: draft.name,
            price,
            stock,
            image_url: draft.image_url,
            category_id,
        }),
        _ => Err(AppError::invalid_fields(fields)),
    }
}

fn check_price(raw: Option<&Value>, fields: &mut Vec<FieldError>) -> Option<Decimal> {
    let Some(price) = coerce::decimal(raw) else {
        fields.push(FieldError::new("price", "Price must be a number"));
        return None;
    };
    let price = price.round_dp(2);
    if price <= Decimal::ZERO {
        fields.push(FieldError::new("price", "Price must be greater than 0"));
        return None;
    }
    if price > MAX_PRICE {
        fields.push(FieldError::new("price", "Price is too large"));
        return None;
    }
    Some(price)
}

fn check_stock(raw: Option<&Value>, fields: &mut Vec<FieldError>) -> Option<i32> {
    let Some(stock) = coerce::number(raw) else {
        fields.push(FieldError::new("stock", "Stock must be a number"));
        return None;
    };
    let before = fields.len();
    if stock.fract() != 0.0 {
        fields.push(FieldError::new("stock", "Stock must be an integer"));
    }
    if stock < 0.0 {
        fields.push(FieldError::new("stock", "Stock cannot be negative"));
    }
    if fields.len() > before {
        return None;
    }
    if stock > f64::from(i32::MAX) {
        fields.push(FieldError::new("stock", "Stock is too large"));
        return None;
    }
    Some(stock as i32)
}

fn check_category(raw: Option<String>, fields: &mut Vec<FieldError>) -> Option<Uuid> {
    let raw = raw?;
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            fields.push(FieldError::new("category", "Invalid category reference"));
            None
        }
    }
}
