//! Sitelog Admin — error types.

use sitelog_core::error::StoreError;
use thiserror::Error;

/// Startup and runtime errors for the admin CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A command-line argument is inconsistent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The event store rejected or failed an operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
