//! Core error types for the AlgoSave application.
//!
//! This module defines storage-agnostic error types. Backend-specific errors
//! (file I/O, serialization of a collection blob, etc.) are converted to
//! these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application core.
///
/// Backend-specific errors are wrapped in string form to keep this type
/// storage-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Storage-agnostic error type for collection blob operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors (file system, in-memory, etc.) into
/// this format. Reads never surface here: an unreadable or corrupt blob is
/// treated as an empty collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not persist a collection blob.
    #[error("Failed to write collection '{collection}': {reason}")]
    WriteFailed { collection: String, reason: String },

    /// A collection blob could not be serialized.
    #[error("Failed to serialize collection '{collection}': {reason}")]
    SerializationFailed { collection: String, reason: String },

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(StoreError::Internal(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
