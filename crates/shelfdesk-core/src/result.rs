//! Convenience result type alias for ShelfDesk.

use crate::error::AppError;

/// A specialized `Result` type for ShelfDesk operations.
pub type AppResult<T> = Result<T, AppError>;
