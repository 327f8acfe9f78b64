//! Request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Table view query for `GET /api/products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductTableQuery {
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// `all`, `low` or `out`.
    pub stock: Option<String>,
    /// `all`, `none` or a category id.
    pub category: Option<String>,
    /// `name`, `price-asc`, `price-desc`, `stock-asc`, `stock-desc`.
    pub sort: Option<String>,
}

/// Query for `GET /api/notifications`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationQuery {
    /// `sorted` applies the display order.
    pub view: Option<String>,
}

/// Filters for `GET /api/audit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditQuery {
    /// `create`, `update` or `delete`.
    pub action: Option<String>,
    /// `product` or `category`.
    pub resource: Option<String>,
}
