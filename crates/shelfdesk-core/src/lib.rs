//! # shelfdesk-core
//!
//! Core crate for ShelfDesk. Contains the record store and session gate
//! traits, configuration schemas, the list query types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other ShelfDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind, FieldError};
pub use result::AppResult;
