//! Result type aliases for the sales crates.

use crate::SalesError;

/// A specialized `Result` type for sales operations.
pub type SalesResult<T> = Result<T, SalesError>;
