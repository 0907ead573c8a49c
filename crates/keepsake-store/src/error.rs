//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Insert rejected because the primary key is already taken.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Model registration failed.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Store configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        match err {
            native_db::db_type::Error::DuplicateKey { key_name } => Error::DuplicateKey(key_name),
            err => Error::Database(err.to_string()),
        }
    }
}
