//! Command-line front end for hostlimit.
//!
//! Reads a JSON inventory, resolves a limit pattern against it, and prints a
//! JSON report of the matched hosts on stdout.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::{debug, error};

use hostlimit::config::{CliConfig, LogLevel};
use hostlimit::logging::init_logging;
use hostlimit::{LimitError, load_inventory, match_report};

/// Resolve a limit pattern against a host inventory.
#[derive(Parser, Debug)]
#[command(name = "hostlimit", version, about)]
struct Args {
    /// Limit pattern, e.g. 'webservers:&staging:!phoenix'.
    #[arg(short, long)]
    pattern: String,

    /// Path to the inventory JSON file.
    #[arg(short, long)]
    inventory: PathBuf,

    /// Indent the JSON report (true or false).
    #[arg(long, action = ArgAction::Set)]
    pretty: Option<bool>,

    /// Include the parsed entities in the report.
    #[arg(long)]
    explain: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            let fallback = CliConfig::default();
            init_logging(&fallback);
            error!(error = %e, "invalid configuration");
            process::exit(2);
        }
    };
    init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        pattern = %args.pattern,
        inventory = %args.inventory.display(),
        "starting hostlimit"
    );

    let inventory = match load_inventory(&args.inventory) {
        Ok(inventory) => inventory,
        Err(e) => {
            error!(error = %e, "failed to load inventory");
            process::exit(2);
        }
    };

    let report = match match_report(&args.pattern, &inventory, args.explain) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, pattern = %args.pattern, "failed to resolve pattern");
            process::exit(2);
        }
    };

    match report.to_json(config.pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!(error = %e, "failed to write report");
            process::exit(1);
        }
    }
}

fn build_config(args: &Args) -> Result<CliConfig, LimitError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(args.log_level, args.pretty))
}
