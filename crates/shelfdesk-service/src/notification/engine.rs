//! Notification derivation from a catalog snapshot.
//!
//! The engine is pure: the same snapshot always yields the same
//! notifications, except that aggregate notifications carry the
//! generation time as their timestamp.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfdesk_entity::category::Category;
use shelfdesk_entity::notification::{Notification, NotificationDetail, NotificationKind, Severity};
use shelfdesk_entity::product::Product;

/// Stock level at or below which a product raises an alert.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 5;

/// Derives notifications from products and categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationEngine {
    threshold: i32,
}

impl Default for NotificationEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

impl NotificationEngine {
    /// Create an engine with a low-stock threshold.
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    /// The low-stock threshold.
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Generate notifications stamped with the current time.
    pub fn generate(&self, products: &[Product], categories: &[Category]) -> Vec<Notification> {
        self.generate_at(products, categories, Utc::now())
    }

    /// Generate notifications, using `now` for aggregate timestamps.
    ///
    /// Output is in emission order: one low-stock alert per product at or
    /// below the threshold (in snapshot order), then the uncategorized
    /// aggregate, then the no-image aggregate. Aggregates are emitted only
    /// when their count is non-zero. No current rule reads `categories`.
    pub fn generate_at(
        &self,
        products: &[Product],
        _categories: &[Category],
        now: DateTime<Utc>,
    ) -> Vec<Notification> {
        let mut notifications: Vec<Notification> = products
            .iter()
            .filter(|p| p.stock <= self.threshold)
            .map(low_stock_alert)
            .collect();

        let uncategorized = products.iter().filter(|p| !p.is_categorized()).count() as u64;
        if uncategorized > 0 {
            notifications.push(aggregate(
                "uncategorized",
                NotificationKind::Uncategorized,
                "Uncategorized Products",
                format!("{uncategorized} product(s) without a category assigned"),
                uncategorized,
                now,
            ));
        }

        let without_image = products.iter().filter(|p| !p.has_image()).count() as u64;
        if without_image > 0 {
            notifications.push(aggregate(
                "no-image",
                NotificationKind::NoImage,
                "Missing Product Images",
                format!("{without_image} product(s) have no image uploaded"),
                without_image,
                now,
            ));
        }

        notifications
    }
}

fn low_stock_alert(product: &Product) -> Notification {
    Notification {
        id: format!("low-stock-{}", product.id),
        kind: NotificationKind::LowStock,
        title: "Low Stock Alert".to_string(),
        message: format!(
            "{} has only {} items left in stock",
            product.name, product.stock
        ),
        severity: if product.stock == 0 {
            Severity::Critical
        } else {
            Severity::Warning
        },
        timestamp: product.updated_at,
        detail: NotificationDetail::Product {
            product_id: product.id,
            product_name: product.name.clone(),
            stock: product.stock,
        },
    }
}

fn aggregate(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: String,
    count: u64,
    now: DateTime<Utc>,
) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message,
        severity: Severity::Info,
        timestamp: now,
        detail: NotificationDetail::Aggregate { count },
    }
}

/// Sort for display: severity rank first, then newest first.
///
/// The sort is stable, so equal keys keep emission order.
pub fn sort_for_display(notifications: &mut [Notification]) {
    notifications.sort_by_key(|n| (n.severity.rank(), Reverse(n.timestamp)));
}

/// Per-severity counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSummary {
    /// Critical notifications.
    pub critical: usize,
    /// Warnings.
    pub warning: usize,
    /// Informational notifications.
    pub info: usize,
    /// All notifications.
    pub total: usize,
}

impl NotificationSummary {
    /// Count a notification list.
    pub fn of(notifications: &[Notification]) -> Self {
        notifications.iter().fold(Self::default(), |mut acc, n| {
            match n.severity {
                Severity::Critical => acc.critical += 1,
                Severity::Warning => acc.warning += 1,
                Severity::Info => acc.info += 1,
            }
            acc.total += 1;
            acc
        })
    }
}
