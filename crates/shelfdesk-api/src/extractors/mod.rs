//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;

pub use auth::AdminSession;
pub use json::JsonBody;
pub use pagination::PaginationParams;
