use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::BlobStore;

/// Filesystem-based blob store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::config_error(format!("Invalid blob key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, blob: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        // Atomic replace via rename.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn round_trips_through_files() {
        let temp = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp.path().join("data"));

        assert_eq!(store.get("imagelab.library").unwrap(), None);
        store.put("imagelab.library", "[]").unwrap();
        assert_eq!(store.get("imagelab.library").unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join("data/imagelab.library.json").exists());
    }

    #[test]
    fn rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp.path());
        assert!(store.put("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.get("").is_err());
    }
}
