use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, Variant};
use crate::ui::theme::ThemeMode;

/// Environment variable that overrides `endpoint.base_url` at deploy time.
pub const API_URL_ENV_VAR: &str = "NOTESUM_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Values supplied on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub variant: Option<Variant>,
    pub theme: Option<ThemeMode>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/notesum/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config directory is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("notesum").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - An existing file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies the environment endpoint and CLI overrides, then re-validates.
    ///
    /// Precedence: CLI flag > `NOTESUM_API_URL` > file > default.
    pub fn resolve(
        mut self,
        env_endpoint: Option<String>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = env_endpoint.filter(|url| !url.trim().is_empty()) {
            self.endpoint.base_url = url;
        }
        if let Some(url) = overrides.endpoint {
            self.endpoint.base_url = url;
        }
        if let Some(variant) = overrides.variant {
            if variant != self.summary.variant {
                // A length chosen for the other contract rarely fits this one.
                self.summary.default_length = None;
            }
            self.summary.variant = variant;
        }
        if let Some(theme) = overrides.theme {
            self.ui.theme = theme;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an absolute http(s) URL
    /// - Timeouts and UI intervals are non-zero
    /// - An explicit default length is allowed by the variant
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.endpoint.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid endpoint base_url '{}': {}", self.endpoint.base_url, e),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Endpoint base_url must use http or https, got '{}'",
                    url.scheme()
                ),
            });
        }

        if self.endpoint.timeout_seconds == 0 || self.endpoint.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Endpoint timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.copy_ack_millis == 0 || self.ui.tick_rate_millis == 0 {
            return Err(ConfigError::ValidationError {
                message: "UI intervals must be greater than zero".to_string(),
            });
        }

        if let Some(length) = self.summary.default_length {
            let policy = self.summary.variant.length_policy();
            if !policy.allows(length) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "default_length {} is not allowed for the {:?} variant (allowed: {})",
                        length,
                        self.summary.variant,
                        policy.describe()
                    ),
                });
            }
        }

        Ok(())
    }
}
