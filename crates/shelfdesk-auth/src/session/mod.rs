//! Opaque session tokens.

pub mod cleanup;
pub mod store;

pub use cleanup::SessionCleanup;
pub use store::{SessionStore, session_lifetime_seconds};
