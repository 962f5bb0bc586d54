//! Cache inspection commands

use crate::console::CliConsole;
use anyhow::Result;
use monrelay_core::{CacheStore, Config};

/// Show every fresh server status record
pub fn show_meta(config: &Config, verbose: bool) -> Result<()> {
    let console = CliConsole::new(verbose);
    let cache = CacheStore::from_config(&config.cache);
    let all = cache.get_server_meta_all();

    console.print_header("Server Meta");
    if all.is_empty() {
        console.warn("No fresh server status records");
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&all)?);
    Ok(())
}

/// Drop cached results of `server_id`
pub fn clear(config: &Config, server_id: &str) -> Result<()> {
    CacheStore::from_config(&config.cache).clear_server(server_id);
    CliConsole::new(true).success(&format!("Cleared cached results of '{server_id}'"));
    Ok(())
}

/// Drop the status record of `server_id`
pub fn clear_meta(config: &Config, server_id: &str) -> Result<()> {
    CacheStore::from_config(&config.cache).clear_server_meta(server_id);
    CliConsole::new(true).success(&format!("Cleared status of '{server_id}'"));
    Ok(())
}

pub fn print_path(config: &Config) {
    println!("{}", config.cache.path().display());
}
