use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "TravelPlanner";
const APP_NAME: &str = "TravelPlanner";

/// Key-value storage for screen data: one JSON file per key under a single
/// root directory. Writes are full overwrites; there is no partial update
/// and no schema version field.
#[derive(Clone, Debug)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Storage under the platform data directory for this app.
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .ok_or(StorageError::Unavailable)?;
        Ok(Self {
            root: dirs.data_dir().to_path_buf(),
        })
    }

    /// Storage rooted at an explicit directory (tests, portable installs).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads the value stored under `key`; `None` if it was never written.
    pub fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Overwrites `key` with `value`, creating the root directory on demand.
    pub fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage directory unavailable")]
    Unavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_root(dir.path());
        assert!(storage.read("expenses").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_root(dir.path());
        storage
            .write("destinations", r#"[{"id":"d-1","name":"Rome"}]"#)
            .unwrap();
        assert_eq!(
            storage.read("destinations").unwrap().as_deref(),
            Some(r#"[{"id":"d-1","name":"Rome"}]"#)
        );
    }

    #[test]
    fn write_is_full_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_root(dir.path());
        storage.write("total", "800.0").unwrap();
        storage.write("total", "900.0").unwrap();
        assert_eq!(storage.read("total").unwrap().as_deref(), Some("900.0"));
    }
}
