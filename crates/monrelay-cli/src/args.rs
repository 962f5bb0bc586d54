//! CLI argument definitions using clap
//!
//! - monrelay servers                      # List servers and cached status
//! - monrelay call <server> <method>       # Invoke a method, print JSON
//! - monrelay probe [--server ID]          # Refresh server status
//! - monrelay cache meta|clear|clear-meta|path
//! - monrelay web-url <api_url>            # Derive the web UI base URL

use clap::{Parser, Subcommand};

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "monrelay.toml";

#[derive(Parser, Debug)]
#[command(name = "monrelay")]
#[command(about = "Monrelay - relay calls to remote monitoring servers with a local result cache")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List configured servers (plus local) with their cached status
    Servers,

    /// Invoke a method on a server and print the result as JSON
    Call {
        /// Server id (`local` for the in-process API)
        server: String,

        /// JSON-RPC method name, e.g. `host.get`
        method: String,

        /// Method parameters as a JSON document
        #[arg(long, default_value = "{}")]
        params: String,

        /// Serve from the cache when an entry is younger than this many seconds
        #[arg(long)]
        cache_ttl: Option<u64>,
    },

    /// Probe servers with `apiinfo.version` and record their status
    Probe {
        /// Probe only this server
        #[arg(long)]
        server: Option<String>,

        /// Ignore a fresh cached status
        #[arg(long)]
        force: bool,
    },

    /// Inspect or clear the on-disk cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Print the web UI base URL for an API endpoint
    WebUrl {
        /// API endpoint, e.g. `https://mon.example.com/api_jsonrpc.php`
        api_url: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CacheAction {
    /// Show every fresh server status record
    Meta,

    /// Drop cached results of a server
    Clear {
        #[arg(long)]
        server: String,
    },

    /// Drop the status record of a server
    ClearMeta {
        #[arg(long)]
        server: String,
    },

    /// Print the cache file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_call_with_defaults() {
        let cli = Cli::parse_from(["monrelay", "call", "eu", "host.get"]);
        assert_eq!(cli.config_file, DEFAULT_CONFIG_FILE);
        match cli.command {
            Commands::Call {
                server,
                method,
                params,
                cache_ttl,
            } => {
                assert_eq!(server, "eu");
                assert_eq!(method, "host.get");
                assert_eq!(params, "{}");
                assert!(cache_ttl.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "monrelay",
            "probe",
            "--force",
            "--config-file",
            "/etc/monrelay.yaml",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config_file, "/etc/monrelay.yaml");
        assert!(matches!(
            cli.command,
            Commands::Probe {
                server: None,
                force: true
            }
        ));
    }

    #[test]
    fn test_parse_cache_actions() {
        let cli = Cli::parse_from(["monrelay", "cache", "clear-meta", "--server", "eu"]);
        assert!(matches!(
            cli.command,
            Commands::Cache {
                action: CacheAction::ClearMeta { ref server }
            } if server == "eu"
        ));

        assert!(Cli::try_parse_from(["monrelay", "cache", "clear"]).is_err());
    }
}
