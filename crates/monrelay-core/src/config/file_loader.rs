//! File-based configuration loading

use super::model::Config;
use crate::error::{MonrelayError, MonrelayResult};
use std::fmt;
use std::fs;
use std::path::Path;

/// Serialization formats accepted for the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension; anything unknown is JSON
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    fn parse(self, content: &str) -> Result<Config, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        })
    }
}

/// Load configuration from a file.
///
/// The format follows the extension (`.toml`, `.yaml`/`.yml`, else JSON).
/// A missing file yields the default configuration.
pub fn load_from_file(path: &Path) -> MonrelayResult<Config> {
    if !path.exists() {
        tracing::debug!("config file {} not found, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        MonrelayError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let format = ConfigFormat::from_path(path);
    format.parse(&content).map_err(|e| {
        MonrelayError::config_with_context(
            format!("Failed to parse {} config: {}", format, e),
            format!("Loading configuration from '{}'", path.display()),
        )
    })
}
