//! Convenience result type alias for PawMart.

use crate::error::AppError;

/// A specialized `Result` type for PawMart operations.
pub type AppResult<T> = Result<T, AppError>;
