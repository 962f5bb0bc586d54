//! Command routing logic for CLI

use crate::args::{CacheAction, Cli, Commands};
use crate::commands;
use anyhow::Result;
use monrelay_core::Config;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Servers => commands::servers::list(&config, cli.verbose),
        Commands::Call {
            server,
            method,
            params,
            cache_ttl,
        } => commands::call::execute(&config, &server, &method, &params, cache_ttl).await,
        Commands::Probe { server, force } => {
            commands::probe::execute(&config, server.as_deref(), force).await
        }
        Commands::Cache { action } => route_cache(&config, action, cli.verbose),
        Commands::WebUrl { api_url } => {
            commands::web_url::print(&api_url);
            Ok(())
        }
    }
}

fn route_cache(config: &Config, action: CacheAction, verbose: bool) -> Result<()> {
    match action {
        CacheAction::Meta => commands::cache::show_meta(config, verbose),
        CacheAction::Clear { server } => commands::cache::clear(config, &server),
        CacheAction::ClearMeta { server } => commands::cache::clear_meta(config, &server),
        CacheAction::Path => {
            commands::cache::print_path(config);
            Ok(())
        }
    }
}
