//! Convenience result type alias for PQP Hub.

use crate::error::AppError;

/// A specialized `Result` type for PQP Hub operations.
pub type AppResult<T> = Result<T, AppError>;
