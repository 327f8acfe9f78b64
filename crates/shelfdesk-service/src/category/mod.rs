//! Category CRUD and the deletion guard.

pub mod service;

pub use service::CategoryService;
