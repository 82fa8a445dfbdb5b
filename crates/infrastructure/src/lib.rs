//! PinDrop Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod persistence;
pub mod serialization;
pub mod settings;

pub use adapters::{LocationNavigator, ReqwestTransport};
pub use persistence::{FileKeyValueStorage, STATE_FILE_NAME};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
pub use settings::{
    CONFIG_FILE_NAME, ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
