//! Core traits defined in `shelfdesk-core` and implemented by other crates.

pub mod session_gate;

pub use session_gate::SessionGate;
