//! # shelfdesk-entity
//!
//! Domain entity models for ShelfDesk. Persisted records (products,
//! categories, audit entries) derive `sqlx::FromRow`; notifications are
//! derived values and are never stored.

pub mod audit;
pub mod category;
pub mod notification;
pub mod product;
