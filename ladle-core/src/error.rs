//! Error types for Ladle Core

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that occur during record-store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Recipe not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid recipe document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Unsupported store URL: {0}")]
    UnsupportedUrl(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        Self::Backend(err.to_string())
    }
}
