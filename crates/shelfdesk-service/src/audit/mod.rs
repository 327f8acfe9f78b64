//! Best-effort audit logging.

pub mod recorder;

pub use recorder::AuditRecorder;
