//! Product entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product in the catalog.
///
/// `stock`, `image_url` and `category_id` default when absent from a
/// stored document, so snapshot consumers never see a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unit price, always positive.
    pub price: Decimal,
    /// Units on hand.
    #[serde(default)]
    pub stock: i32,
    /// Public image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Referenced category, if any.
    #[serde(default, rename = "category")]
    pub category_id: Option<Uuid>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether an image is attached. Empty strings count as absent.
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Whether a category is attached.
    pub fn is_categorized(&self) -> bool {
        self.category_id.is_some()
    }

    /// Stock value of this product (`price * stock`).
    pub fn inventory_value(&self) -> Decimal {
        self.price * Decimal::from(self.stock)
    }
}

/// Validated data for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units on hand.
    pub stock: i32,
    /// Image URL.
    pub image_url: Option<String>,
    /// Category reference.
    #[serde(rename = "category")]
    pub category_id: Option<Uuid>,
}

/// Name-only projection of a referenced category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category identifier.
    pub id: Uuid,
    /// Category name.
    pub name: String,
}

/// A product as shown in list views, with its category expanded.
///
/// `category` is `None` both for uncategorized products and for products
/// whose category reference no longer resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItem {
    /// Product identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units on hand.
    pub stock: i32,
    /// Image URL.
    pub image_url: Option<String>,
    /// Expanded category.
    pub category: Option<CategoryRef>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl ProductListItem {
    /// Attach an optional category projection to a product.
    pub fn from_product(product: Product, category: Option<CategoryRef>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            image_url: product.image_url,
            category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
