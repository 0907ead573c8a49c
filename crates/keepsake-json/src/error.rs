//! Error types for keepsake-json

use thiserror::Error;

/// JSON conversion error type
#[derive(Debug, Error)]
pub enum Error {
    /// Value could not be encoded
    #[error("Encode error: {0}")]
    Encode(String),

    /// Input was malformed or did not match the target type
    #[error("Decode error at line {line}, column {column}: {message}")]
    Decode {
        line: usize,
        column: usize,
        message: String,
    },

    /// Encoded bytes were not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Error::Decode {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result type for JSON conversions
pub type Result<T> = std::result::Result<T, Error>;
