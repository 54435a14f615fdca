//! Configuration loading for the content client.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Base URL the document store is served from, e.g. `https://example.mr`.
    pub base_url: String,
    /// Per-request timeout. Bounds how long a view can sit in `Loading`.
    pub request_timeout_ms: u64,
    /// How long a cached document stays fresh.
    pub cache_ttl_secs: u64,
    /// Interval for the background full-cache refresh. Absent = no refresh task.
    pub refresh_interval_secs: Option<u64>,
    /// Admin panel URL to navigate to after a successful login or signup.
    pub admin_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("Failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },
}

impl ContentConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ContentConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache_ttl_secs",
                reason: "must be > 0".to_string(),
            });
        }
        if let Some(secs) = self.refresh_interval_secs {
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "refresh_interval_secs",
                    reason: "must be > 0 when set".to_string(),
                });
            }
        }
        if self.admin_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "admin_url",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs.map(Duration::from_secs)
    }
}
