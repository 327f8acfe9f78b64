//! # shelfdesk-api
//!
//! HTTP API layer for ShelfDesk built on Axum.
//!
//! Provides the REST endpoints for products, categories, notifications,
//! the dashboard report and the audit log, plus the cookie session
//! extractor, request logging, CORS, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
