use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::BlobStore;

/// In-memory blob store. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.blobs.lock().map_err(|_| AppError::config_error("Blob store lock poisoned"))
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put(&self, key: &str, blob: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
