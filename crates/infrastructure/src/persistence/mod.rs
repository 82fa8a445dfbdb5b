//! File-backed persistence.

mod file_storage;

pub use file_storage::{FileKeyValueStorage, STATE_FILE_NAME};
