use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/vendor-desk/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("vendor-desk").join("config.toml")
    }

    /// Default log file under the platform data directory.
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("vendor-desk").join("vendor-desk.log")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an absolute http(s) URL
    /// - The collection name is not empty
    /// - Page size options are non-empty and non-zero
    /// - The default page size is one of the options
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = reqwest::Url::parse(&self.remote.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid base_url '{}': {}", self.remote.base_url, e),
            }
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url '{}' must use http or https",
                    self.remote.base_url
                ),
            });
        }

        if self.remote.collection.trim_matches('/').is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Collection name must not be empty".to_string(),
            });
        }

        let options = &self.table.page_size_options;
        if options.is_empty() || options.contains(&0) {
            return Err(ConfigError::ValidationError {
                message: "page_size_options must be non-empty and contain no zero".to_string(),
            });
        }

        if !options.contains(&self.table.page_size) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "page_size {} is not one of page_size_options {:?}",
                    self.table.page_size, options
                ),
            });
        }

        Ok(())
    }

    /// Resolved log file path.
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }
}
