//! Error types for cart persistence.
//!
//! Only persistence *writes* can fail; reads degrade to an empty cart
//! instead of erroring (see [`crate::store::CartStore::read`]).

use thiserror::Error;

/// Errors from a [`CartStorage`](crate::storage::CartStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (file backends).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors from mutating cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend rejected the write.
    #[error("cart storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be serialized for persistence.
    #[error("cart serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
