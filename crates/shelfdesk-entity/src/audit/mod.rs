//! Audit log entities.

pub mod model;

pub use model::{AuditAction, AuditLog, AuditResource, NewAuditLog, DEFAULT_AUDIT_USER};
