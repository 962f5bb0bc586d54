//! CLI commands

pub mod cache;
pub mod call;
pub mod probe;
pub mod servers;
pub mod web_url;

use anyhow::{Context, Result};
use monrelay_core::{Config, Dispatcher, FixtureLocalApi, LocalApi, load_config};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Per-user configuration used when the given file does not exist
fn user_config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".monrelay").join("monrelay.toml"))
}

/// Load configuration from `config_file`, falling back to the per-user file
pub fn load_cli_config(config_file: &str) -> Result<Config> {
    let path = if Path::new(config_file).exists() {
        PathBuf::from(config_file)
    } else {
        user_config_file()
            .filter(|path| path.exists())
            .unwrap_or_else(|| PathBuf::from(config_file))
    };

    load_config(&path).with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Local API backing the `local` pseudo-server
fn local_api(config: &Config) -> Result<Arc<dyn LocalApi>> {
    let api = match &config.local.fixtures {
        Some(path) => FixtureLocalApi::from_file(path)
            .with_context(|| format!("Failed to load local fixtures from {}", path.display()))?,
        None => FixtureLocalApi::new(),
    };
    Ok(Arc::new(api))
}

/// Build the dispatcher for the loaded configuration
pub fn build_dispatcher(config: &Config) -> Result<Dispatcher> {
    Ok(Dispatcher::from_config(config, local_api(config)?)?)
}
