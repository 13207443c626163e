//! Command-line surface: where the config lives and per-run overrides.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug, Default)]
#[command(name = "vendor-desk", version, about = "Terminal front-end for a vendor CRUD store")]
pub struct Cli {
    /// Config file to load instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override remote.base_url
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override table.page_size (must be one of the configured options)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Override logging.level (tracing filter directive)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Config file this run reads.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file, apply flag overrides, and validate the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load_from(&self.config_path())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.remote.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.table.page_size = page_size;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_config() -> PathBuf {
        PathBuf::from("/nonexistent/vendor-desk/config.toml")
    }

    #[test]
    fn overrides_replace_file_values() {
        let cli = Cli::parse_from([
            "vendor-desk",
            "--config",
            "/nonexistent/vendor-desk/config.toml",
            "--base-url",
            "http://127.0.0.1:9000",
            "--page-size",
            "8",
            "--log-level",
            "debug",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.remote.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.table.page_size, 8);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn page_size_outside_options_is_rejected() {
        let cli = Cli {
            config: Some(missing_config()),
            page_size: Some(7),
            ..Cli::default()
        };
        let err = cli.resolve_config().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let cli = Cli {
            config: Some(missing_config()),
            base_url: Some("ftp://example.com".into()),
            ..Cli::default()
        };
        assert!(cli.resolve_config().is_err());
    }
}
