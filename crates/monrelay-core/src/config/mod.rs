//! Configuration management for monrelay
//!
//! Configuration is loaded once (file, then environment overrides, then
//! validation) and handed to the registry and clients as an immutable value.

mod env_loader;
mod file_loader;
mod logging_config;
mod model;
mod server;
mod validation;

pub mod timeouts;

pub use env_loader::apply_env_overrides;
pub use file_loader::load_from_file;
pub use logging_config::LoggingConfig;
pub use model::{CacheConfig, Config, LocalConfig, RemoteConfig};
pub use server::{LOCAL_SERVER_ID, ServerDescriptor, Transport};

use crate::error::MonrelayResult;
use std::path::Path;

/// Load configuration from `path`, apply environment overrides and validate
pub fn load_config(path: impl AsRef<Path>) -> MonrelayResult<Config> {
    let mut config = load_from_file(path.as_ref())?;
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}
