//! List configured servers

use crate::console::CliConsole;
use anyhow::Result;
use monrelay_core::{CacheStore, Config, ServerRegistry};

/// Print every server (configured, then local) with its cached status
pub fn list(config: &Config, verbose: bool) -> Result<()> {
    let console = CliConsole::new(verbose);
    let registry = ServerRegistry::new(config.servers.clone());
    let cache = CacheStore::from_config(&config.cache);
    let meta = cache.get_server_meta_all();

    console.print_header("Servers");
    for server in registry.all() {
        let detail = if server.is_local {
            "in-process".to_string()
        } else if server.enabled {
            server.api_url.clone()
        } else {
            format!("{} (disabled)", server.api_url)
        };
        let status = meta.get(&server.id).cloned().unwrap_or_default();
        console.print_server(&server.id, server.display_name(), &detail, &status);
    }

    if registry.is_empty() {
        console.info("No remote servers configured");
    }
    Ok(())
}
