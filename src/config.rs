//! Configuration management for the recycle web client
//!
//! A single `ClientConfig` carries the backend origin used by every caller,
//! so the login flow and the contact form never disagree on where to send
//! requests.

use config::{Config, Environment, File};
use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Complete client configuration
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

/// Backend connection settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin every request path is resolved against.
    /// Environment: RECYCLE__API__BASE_URL
    pub base_url: String,

    /// Per-request timeout.
    /// Environment: RECYCLE__API__TIMEOUT_SECS
    pub timeout_secs: u64,
}

/// Where the command-line front end keeps its tokens between runs
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Environment: RECYCLE__STORAGE__TOKEN_FILE
    pub token_file: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_file: ".recycle/tokens.json".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `config.toml` (optional) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem with environment overrides
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("RECYCLE").separator("__"))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            config::ConfigError::Message(format!(
                "api.base_url '{}' is not a valid URL: {e}",
                self.api.base_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(config::ConfigError::Message(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "api.timeout_secs must be greater than 0".into(),
            ));
        }

        if self.storage.token_file.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "storage.token_file cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl ApiConfig {
    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl StorageConfig {
    /// Get token file as PathBuf
    pub fn token_file_path(&self) -> PathBuf {
        PathBuf::from(&self.token_file)
    }
}
