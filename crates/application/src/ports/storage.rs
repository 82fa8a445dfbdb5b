//! Durable key/value storage port

use thiserror::Error;

/// Errors raised by durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be parsed or written.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Port for string-keyed durable storage, in the manner of browser local
/// storage.
///
/// Operations are synchronous so that session writes complete before the
/// caller continues.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`; removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Stores several entries. Adapters that can write them in one step
    /// should override this.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry cannot be written.
    fn set_items(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set_item(key, value)?;
        }
        Ok(())
    }

    /// Removes several keys. Adapters that can remove them in one step
    /// should override this.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove_item(key)?;
        }
        Ok(())
    }
}
