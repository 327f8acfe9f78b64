//! Notification feed built from the current catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use shelfdesk_core::result::AppResult;
use shelfdesk_database::store::{CategoryStore, ProductStore};
use shelfdesk_entity::notification::Notification;

use super::engine::{NotificationEngine, NotificationSummary, sort_for_display};

/// Notifications with their counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationFeed {
    /// Number of notifications.
    pub count: usize,
    /// Notifications in emission or display order.
    pub notifications: Vec<Notification>,
    /// Per-severity counts.
    pub summary: NotificationSummary,
}

/// Loads a catalog snapshot and runs the notification engine over it.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Product store.
    products: Arc<dyn ProductStore>,
    /// Category store.
    categories: Arc<dyn CategoryStore>,
    /// Derivation rules.
    engine: NotificationEngine,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        products: Arc<dyn ProductStore>,
        categories: Arc<dyn CategoryStore>,
        engine: NotificationEngine,
    ) -> Self {
        Self {
            products,
            categories,
            engine,
        }
    }

    /// The engine in use.
    pub fn engine(&self) -> NotificationEngine {
        self.engine
    }

    /// Build the feed. `sorted` applies the display order.
    pub async fn feed(&self, sorted: bool) -> AppResult<NotificationFeed> {
        let products = self.products.all().await?;
        let categories = self.categories.all().await?;

        let mut notifications = self.engine.generate(&products, &categories);
        if sorted {
            sort_for_display(&mut notifications);
        }

        let summary = NotificationSummary::of(&notifications);
        debug!(
            products = products.len(),
            notifications = summary.total,
            critical = summary.critical,
            "Notifications generated"
        );

        Ok(NotificationFeed {
            count: notifications.len(),
            notifications,
            summary,
        })
    }
}
