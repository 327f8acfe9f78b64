//! # shelfdesk-database
//!
//! Record store abstractions for ShelfDesk with two backends: PostgreSQL
//! repositories built on sqlx, and an in-memory store used for local runs
//! and tests. [`Stores`] picks the backend from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Stores;
pub use store::{AuditFilter, AuditStore, CategoryStore, ProductStore};
