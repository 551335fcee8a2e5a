//! Storage abstraction trait
//!
//! This module defines the ObjectStorage trait the upload pipeline writes
//! through, so tests can substitute an in-process fake for the S3 backend.

use async_trait::async_trait;
use reelvault_core::AppError;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            other => AppError::Storage(other.to_string()),
        }
    }
}

/// Durable object store addressed by key.
///
/// One attempt per call; the pipeline never retries a failed put, and a put
/// that succeeds is never deleted by this core, even when the later
/// metadata write fails and the object ends up unreferenced.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload an object under `key` with the declared content type.
    /// Returns the publicly retrievable URL for the object.
    async fn put_object(
        &self,
        key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String>;

    /// Public URL for an object key without uploading anything.
    fn object_url(&self, key: &str) -> String;
}
