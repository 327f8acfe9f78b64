//! # shelfdesk-service
//!
//! Business logic for ShelfDesk. Services receive their stores as
//! `Arc<dyn …Store>` at construction time and never talk to a concrete
//! backend directly.

pub mod audit;
pub mod category;
pub mod context;
pub mod notification;
pub mod product;
pub mod report;
pub mod validation;

pub use audit::AuditRecorder;
pub use category::CategoryService;
pub use context::RequestContext;
pub use notification::{NotificationEngine, NotificationService};
pub use product::ProductService;
pub use report::ReportService;
