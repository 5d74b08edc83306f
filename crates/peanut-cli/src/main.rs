//! Peanut CLI - daily allowance and stats viewer
//!
//! A command-line host for the Peanut frame: shows the daily reset
//! countdown, per-user peanut stats and the tracked history.

mod commands;
mod output;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "peanut")]
#[command(author, version, about = "Peanut daily allowance and stats CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Evaluate at this instant instead of the current time (RFC 3339)
    #[arg(long, global = true, value_parser = commands::parse_instant)]
    now: Option<DateTime<Utc>>,

    /// Override config file path (or set PEANUT_CONFIG env var)
    #[arg(long, env = "PEANUT_CONFIG", global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the next daily reset and the time left until it
    Reset,

    /// Show a user's peanut stats and allowance
    Stats(commands::stats::StatsArgs),

    /// Show how long peanut history has been tracked
    History,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Config subcommands must work even when the config file is broken
    let load_context =
        || commands::Context::load(cli.config.as_deref(), cli.format, cli.quiet, cli.now);

    match cli.command {
        Commands::Reset => commands::reset::execute(&load_context()?),
        Commands::Stats(args) => commands::stats::execute(&load_context()?, args).await,
        Commands::History => commands::history::execute(&load_context()?),
        Commands::Config { action } => {
            commands::config::execute(cli.config.as_deref(), cli.format, cli.quiet, action)
        }
    }
}
