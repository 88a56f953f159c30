//! Key-value blob store port definition.

use crate::domain::AppError;

/// Persists string blobs under namespaced keys.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `blob` under `key`, replacing any previous value.
    fn put(&self, key: &str, blob: &str) -> Result<(), AppError>;
}
