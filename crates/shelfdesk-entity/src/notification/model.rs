//! Notification model.
//!
//! Notifications are recomputed on every request from a catalog snapshot
//! and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of catalog condition a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// A product at or below the low-stock threshold.
    LowStock,
    /// Products without a category.
    Uncategorized,
    /// Products without an image.
    NoImage,
}

impl NotificationKind {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LowStock => "low-stock",
            Self::Uncategorized => "uncategorized",
            Self::NoImage => "no-image",
        }
    }
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Needs immediate action.
    Critical,
    /// Needs attention.
    Warning,
    /// Informational.
    Info,
}

impl Severity {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Display order: lower ranks sort first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }
}

/// Kind-specific notification payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationDetail {
    /// Per-product low-stock detail.
    #[serde(rename_all = "camelCase")]
    Product {
        /// Product identifier.
        product_id: Uuid,
        /// Product name at generation time.
        product_name: String,
        /// Stock at generation time.
        stock: i32,
    },
    /// Aggregate count of affected products.
    Aggregate {
        /// Number of affected products.
        count: u64,
    },
}

/// A derived catalog notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable identifier (`low-stock-{id}`, `uncategorized`, `no-image`).
    pub id: String,
    /// Notification kind.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Human-readable message.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// Product update time for low-stock alerts, generation time otherwise.
    pub timestamp: DateTime<Utc>,
    /// Kind-specific fields, flattened into the object.
    #[serde(flatten)]
    pub detail: NotificationDetail,
}
