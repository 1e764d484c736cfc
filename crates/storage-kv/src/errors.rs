//! Storage-specific error types for the key-value backend.
//!
//! This module provides error types that wrap backend-specific failures and
//! convert them to the storage-agnostic error types defined in
//! `algosave_core`.

use algosave_core::errors::{Error, StoreError};
use thiserror::Error;

/// Backend-specific errors raised below the repository layer.
///
/// These errors are internal to the storage crate and are converted to
/// `algosave_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum KvError {
    #[error("I/O failure on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failure on '{key}': {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<KvError> for Error {
    fn from(err: KvError) -> Self {
        match err {
            KvError::Io { key, source } => Error::Storage(StoreError::WriteFailed {
                collection: key,
                reason: source.to_string(),
            }),
            KvError::Serde { key, source } => Error::Storage(StoreError::SerializationFailed {
                collection: key,
                reason: source.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_write_failed() {
        let err = KvError::Io {
            key: "algosave_goals".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only fs"),
        };
        match Error::from(err) {
            Error::Storage(StoreError::WriteFailed { collection, reason }) => {
                assert_eq!(collection, "algosave_goals");
                assert!(reason.contains("read-only fs"));
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn test_serde_error_maps_to_serialization_failed() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = KvError::Serde {
            key: "algosave_groups".to_string(),
            source,
        };
        match Error::from(err) {
            Error::Storage(StoreError::SerializationFailed { collection, .. }) => {
                assert_eq!(collection, "algosave_groups");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
