use std::path::PathBuf;

use thiserror::Error;

use super::ValidationError;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Bucket not found: {bucket}")]
    BucketNotFound { bucket: String },

    #[error("Bucket not empty: {bucket}")]
    BucketNotEmpty { bucket: String },

    #[error("Object not found: {key}")]
    ObjectNotFound { key: String },

    #[error("Object '{key}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        key: String,
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to read local file '{}': {source}", .path.display())]
    LocalFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage backend error: {message}")]
    Backend { message: String },
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
