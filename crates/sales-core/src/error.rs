//! Unified error type for the sales crates.

use std::error::Error as StdError;
use std::fmt::Debug;
use thiserror::Error;

/// Boxed driver error kept as the cause of a [`SalesError::Database`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Unified error type for the sales data-access layer.
///
/// Every failure coming out of the database driver is surfaced as
/// [`SalesError::Database`]. The driver's message is copied into the
/// variant and the driver error itself stays reachable through
/// [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum SalesError {
    /// Database error
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SalesError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a database error wrapping the driver error that caused it.
    #[must_use]
    pub fn database_with_source<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Database {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the driver message for database errors.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Database { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Checks if this error is a database error.
    #[must_use]
    pub const fn is_database(&self) -> bool {
        matches!(self, Self::Database { .. })
    }

    /// Checks if this error is retriable.
    ///
    /// Only advisory: nothing in this workspace retries on its own.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for SalesError {
    fn from(err: sqlx::Error) -> Self {
        Self::database_with_source(err)
    }
}
