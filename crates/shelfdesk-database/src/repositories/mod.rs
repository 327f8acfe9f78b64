//! PostgreSQL repository implementations of the store traits.

pub mod audit;
pub mod category;
pub mod product;

pub use audit::AuditLogRepository;
pub use category::CategoryRepository;
pub use product::ProductRepository;

use shelfdesk_core::error::{AppError, ErrorKind};

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Map a write failure, turning unique violations into conflicts.
fn map_write_error(err: sqlx::Error, conflict_message: String, context: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            AppError::conflict(conflict_message)
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}
