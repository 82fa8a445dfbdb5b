//! Key/value storage in a JSON state file.
//!
//! Stores entries in the platform-specific config directory by default:
//! - Linux: ~/.config/pindrop/state.json
//! - macOS: ~/Library/Application Support/pindrop/state.json
//! - Windows: %APPDATA%/pindrop/state.json
//!
//! Writes go to a sibling temporary file that is then renamed over the
//! state file, so a crash never leaves a half-written session behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use pindrop_application::ports::{KeyValueStorage, StorageError};

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// File name of the state file inside the state directory.
pub const STATE_FILE_NAME: &str = "state.json";

type Entries = BTreeMap<String, String>;

/// Durable storage backed by a single JSON object of string entries.
#[derive(Debug)]
pub struct FileKeyValueStorage {
    path: PathBuf,
    /// Serializes read-modify-write cycles within the process.
    lock: Mutex<()>,
}

impl FileKeyValueStorage {
    /// Creates storage backed by the file at `path`.
    ///
    /// The file and its parent directory are created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Creates storage backed by [`STATE_FILE_NAME`] inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STATE_FILE_NAME))
    }

    /// Returns the default state directory, if the platform has one.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pindrop"))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => from_json_bytes(&bytes).map_err(serialization_error),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = to_json_stable_bytes(entries).map_err(serialization_error)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Entries) -> bool) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let (mut entries, recovered) = match self.read_entries() {
            Ok(entries) => (entries, false),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "State file is unreadable, replacing it");
                (Entries::new(), true)
            }
            Err(e) => return Err(e),
        };
        if apply(&mut entries) || recovered {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

fn serialization_error(error: SerializationError) -> StorageError {
    StorageError::Serialization(error.to_string())
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_items(&[(key, value)])
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.remove_items(&[key])
    }

    fn set_items(&self, items: &[(&str, &str)]) -> Result<(), StorageError> {
        self.update(|entries| {
            for (key, value) in items {
                entries.insert((*key).to_string(), (*value).to_string());
            }
            true
        })
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            let before = entries.len();
            entries.retain(|k, _| !keys.contains(&k.as_str()));
            entries.len() != before
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::in_dir(dir.path());

        assert_eq!(storage.get_item("token").unwrap(), None);
        storage.remove_items(&["user", "token"]).unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_set_and_remove_items() {
        let dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::in_dir(&dir.path().join("nested"));

        storage
            .set_items(&[("user", r#"{"id":1}"#), ("token", "abc")])
            .unwrap();
        storage.set_item("theme", "dark").unwrap();
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("abc"));

        storage.remove_items(&["user", "token"]).unwrap();
        assert_eq!(storage.get_item("user").unwrap(), None);
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_layout_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::in_dir(dir.path());

        storage.set_items(&[("user", "u"), ("token", "t")]).unwrap();

        let content = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(content, "{\n  \"token\": \"t\",\n  \"user\": \"u\"\n}\n");
        assert!(!dir.path().join("state.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::in_dir(dir.path());
        fs::write(storage.path(), "not json").unwrap();

        let result = storage.get_item("token");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_write_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::in_dir(dir.path());
        fs::write(storage.path(), "not json").unwrap();

        storage.remove_items(&["user", "token"]).unwrap();

        assert_eq!(fs::read_to_string(storage.path()).unwrap(), "{}\n");
        assert_eq!(storage.get_item("token").unwrap(), None);
    }

    #[test]
    fn test_default_dir_ends_with_app_name() {
        if let Some(dir) = FileKeyValueStorage::default_dir() {
            assert!(dir.ends_with("pindrop"));
        }
    }
}
