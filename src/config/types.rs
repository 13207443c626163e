use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location of the hosted vendor collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the mock API (e.g. "https://<project>.mockapi.io").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection resource name appended to the base URL.
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl RemoteConfig {
    /// `{base_url}/{collection}` with redundant slashes removed.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }
}

/// Vendor table pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per page when the table opens.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Page sizes the user can cycle through.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

/// Diagnostic log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://664b2416a300e8795d445f21.mockapi.io".to_string()
}

fn default_collection() -> String {
    "crud".to_string()
}

fn default_page_size() -> usize {
    5
}

fn default_page_size_options() -> Vec<usize> {
    vec![3, 5, 8, 16, 24]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
