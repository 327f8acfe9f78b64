//! Dashboard reporting.

pub mod dashboard;

pub use dashboard::{CategoryInventory, DashboardReport, ProductValue, ReportService};
