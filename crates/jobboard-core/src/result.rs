//! Convenience result type alias for JobBoard.

use crate::error::AppError;

/// A specialized `Result` type for JobBoard operations.
pub type AppResult<T> = Result<T, AppError>;
