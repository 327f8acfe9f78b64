//! Derived catalog notifications.

pub mod engine;
pub mod service;

pub use engine::{DEFAULT_LOW_STOCK_THRESHOLD, NotificationEngine, NotificationSummary, sort_for_display};
pub use service::{NotificationFeed, NotificationService};
