//! CLI console utilities

use colored::*;
use monrelay_core::ServerMeta;

/// CLI console for formatted output.
///
/// Status lines go to stderr so that JSON written to stdout stays pipeable.
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print one server row with its status
    pub fn print_server(&self, id: &str, name: &str, detail: &str, meta: &ServerMeta) {
        println!(
            "  {} {} {} {}",
            status_badge(meta),
            id.cyan().bold(),
            name,
            detail.dimmed()
        );
        if self.verbose {
            println!("      {}", describe_meta(meta).dimmed());
        }
    }
}

/// Colored one-word status
pub fn status_badge(meta: &ServerMeta) -> ColoredString {
    match meta.connection_status.as_deref() {
        Some("up") => "up     ".green().bold(),
        Some("down") => "down   ".red().bold(),
        Some(other) => format!("{other:<7}").yellow(),
        None => "unknown".dimmed(),
    }
}

/// Human-readable summary of a meta record
pub fn describe_meta(meta: &ServerMeta) -> String {
    let version = meta.api_version.as_deref().unwrap_or("-");
    let reached = meta
        .last_reached
        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());
    format!("api {version}, last reached {reached}")
}
