//! Client settings.
//!
//! Sources are layered, later ones winning:
//! 1. Built-in defaults
//! 2. `pindrop.toml` in the platform config directory, if present
//! 3. `PINDROP_*` environment variables (`PINDROP_BASE_URL`,
//!    `PINDROP_TIMEOUT_SECS`, `PINDROP_STATE_DIR`)
//!
//! Command-line flags are applied on top by the binary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::persistence::FileKeyValueStorage;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pindrop-backend-fc3j.onrender.com/api";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "pindrop.toml";

const ENV_PREFIX: &str = "PINDROP";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or merged.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The configured value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The timeout is zero.
    #[error("timeout must be at least one second")]
    InvalidTimeout,

    /// No state directory was configured and the platform has none.
    #[error("could not determine a state directory; set PINDROP_STATE_DIR")]
    NoStateDir,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    base_url: String,
    timeout_secs: u64,
    state_dir: Option<PathBuf>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL; request paths are appended to it.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Directory holding the state file.
    pub state_dir: PathBuf,
}

impl ClientConfig {
    /// Loads configuration from the default file location and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let file = FileKeyValueStorage::default_dir().map(|dir| dir.join(CONFIG_FILE_NAME));
        Self::load_from(file.as_deref(), None)
    }

    /// Loads configuration from `file` (skipped when absent) and from
    /// `env`, or the process environment when `env` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value is invalid.
    pub fn load_from(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }

        let raw: RawConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        let state_dir = match raw.state_dir {
            Some(dir) => dir,
            None => FileKeyValueStorage::default_dir().ok_or(ConfigError::NoStateDir)?,
        };

        let config = Self {
            base_url: parse_base_url(&raw.base_url)?,
            timeout: Duration::from_secs(raw.timeout_secs),
            state_dir,
        };
        config.validate()?;
        tracing::debug!(base_url = %config.base_url, state_dir = %config.state_dir.display(), "Configuration loaded");
        Ok(config)
    }

    /// Replaces the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not an absolute http(s) URL.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(url)?;
        Ok(self)
    }

    /// Replaces the state directory.
    #[must_use]
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = dir.into();
        self
    }

    const fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url)
}
