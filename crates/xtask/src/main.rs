//! Development tasks for the effect aggregation workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Aggregate, ValidateRules};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info";

/// Development tasks for effect aggregation
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for effect aggregation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load a rule table, validate it and list its lints
    ValidateRules(ValidateRules),

    /// Aggregate an effect fixture and print the canonical records
    Aggregate(Aggregate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for EFFECT_RULES_PATH and RUST_LOG)
    let _ = dotenvy::dotenv();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::ValidateRules(cmd) => cmd.execute(),
        Command::Aggregate(cmd) => cmd.execute(),
    }
}

/// `RUST_LOG` directives when given and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
