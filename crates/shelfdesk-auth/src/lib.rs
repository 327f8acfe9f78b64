//! # shelfdesk-auth
//!
//! Single-administrator authentication for ShelfDesk.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing of the configured admin password
//! - `session`: Opaque session tokens and their periodic cleanup
//! - `authenticator`: Login and logout on top of both

pub mod authenticator;
pub mod password;
pub mod session;

pub use authenticator::Authenticator;
pub use password::PasswordHasher;
pub use session::{SessionCleanup, SessionStore};
