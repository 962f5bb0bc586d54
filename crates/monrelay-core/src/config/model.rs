//! Configuration model

use super::logging_config::LoggingConfig;
use super::server::ServerDescriptor;
use super::timeouts;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default cache file name inside the cache directory
pub const DEFAULT_CACHE_FILE_NAME: &str = "monrelay_cache.json";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configured remote servers; the local pseudo-server is never listed here
    pub servers: Vec<ServerDescriptor>,
    pub remote: RemoteConfig,
    pub cache: CacheConfig,
    pub local: LocalConfig,
    pub logging: LoggingConfig,
}

/// Remote JSON-RPC client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Timeout of a single request attempt
    pub request_timeout_secs: u64,
    /// Timeout for establishing the connection
    pub connect_timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: timeouts::REMOTE_REQUEST_SECS,
            connect_timeout_secs: timeouts::REMOTE_CONNECT_SECS,
        }
    }
}

impl RemoteConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// On-disk cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding the cache file (defaults to the OS temp dir)
    pub dir: Option<PathBuf>,
    pub file_name: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: DEFAULT_CACHE_FILE_NAME.to_string(),
        }
    }
}

impl CacheConfig {
    /// Full path of the cache document
    pub fn path(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
            .join(&self.file_name)
    }
}

/// Local pseudo-server settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// JSON document `{ "<method>": [results...] }` served for the local server
    pub fixtures: Option<PathBuf>,
}
