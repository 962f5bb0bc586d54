//! Monrelay CLI application
//!
//! Operator tool over `monrelay-core`: call a method on a configured server
//! or on the local pseudo-server, probe reachability and inspect the
//! on-disk cache.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/monrelay-cli
//! ```

mod args;
mod commands;
mod console;
mod router;

use anyhow::Result;
use clap::Parser;
use monrelay_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

pub use args::{CacheAction, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::load_cli_config(&cli.config_file)?;

    init_logging(&config.logging, cli.verbose);

    router::route(cli, config).await
}

/// Initialize logging; `RUST_LOG` wins over the configured level
fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.is_json() {
        builder.json().init();
    } else if logging.is_compact() {
        builder.compact().init();
    } else {
        builder.init();
    }
}
