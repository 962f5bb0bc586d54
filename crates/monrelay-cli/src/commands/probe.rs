//! Server reachability probing

use super::build_dispatcher;
use crate::console::{CliConsole, describe_meta, status_badge};
use anyhow::{Result, bail};
use colored::*;
use monrelay_core::error::NO_SERVER_MESSAGE;
use monrelay_core::{CacheStore, Config, ProbeOutcome, StatusProbe};

/// Probe one server, or every enabled server plus local
pub async fn execute(config: &Config, server_id: Option<&str>, force: bool) -> Result<()> {
    let console = CliConsole::new(true);
    let dispatcher = build_dispatcher(config)?;
    let cache = CacheStore::from_config(&config.cache);
    let probe = StatusProbe::new(&dispatcher, &cache);

    let outcomes = match server_id {
        Some(id) => {
            let Some(server) = dispatcher.resolve(id) else {
                bail!(NO_SERVER_MESSAGE);
            };
            vec![probe.probe(&server, force).await]
        }
        None => probe.probe_all(force).await,
    };

    console.print_header("Server Status");
    for outcome in &outcomes {
        print_outcome(outcome);
    }

    let down = outcomes.iter().filter(|o| !o.meta.is_up()).count();
    if down == 0 {
        console.success(&format!("{} server(s) reachable", outcomes.len()));
    } else {
        console.warn(&format!("{down} of {} server(s) unreachable", outcomes.len()));
    }
    Ok(())
}

fn print_outcome(outcome: &ProbeOutcome) {
    let source = if outcome.from_cache { " (cached)" } else { "" };
    println!(
        "  {} {} {}{}",
        status_badge(&outcome.meta),
        outcome.server_id.cyan().bold(),
        describe_meta(&outcome.meta),
        source.dimmed()
    );
    if let Some(error) = &outcome.error {
        println!("      {}", error.to_string().red());
    }
}
