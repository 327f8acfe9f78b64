//! Derived notification entities.

pub mod model;

pub use model::{Notification, NotificationDetail, NotificationKind, Severity};
