//! Environment variable overrides

use super::model::Config;
use crate::error::{MonrelayError, MonrelayResult};
use std::env;
use std::path::PathBuf;

/// Override the cache directory
pub const ENV_CACHE_DIR: &str = "MONRELAY_CACHE_DIR";
/// Override the per-attempt request timeout (seconds)
pub const ENV_REQUEST_TIMEOUT: &str = "MONRELAY_REQUEST_TIMEOUT";
/// Override the log level
pub const ENV_LOG_LEVEL: &str = "MONRELAY_LOG_LEVEL";

/// Apply `MONRELAY_*` environment variables on top of a loaded config
pub fn apply_env_overrides(config: &mut Config) -> MonrelayResult<()> {
    apply_overrides_from(config, |key| env::var(key).ok())
}

fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> MonrelayResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(ENV_CACHE_DIR) {
        config.cache.dir = Some(PathBuf::from(dir));
    }

    if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT) {
        config.remote.request_timeout_secs = timeout.parse().map_err(|_| {
            MonrelayError::config_with_context(
                format!("Invalid {} value", ENV_REQUEST_TIMEOUT),
                format!("Parsing timeout value '{}'", timeout),
            )
        })?;
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }

    Ok(())
}
