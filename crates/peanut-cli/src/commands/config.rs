//! Config commands
//!
//! Commands for inspecting and creating the allowance configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use peanut_core::config::{expand_path, get_config_path};
use peanut_core::AllowanceConfig;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_error, print_info, print_rows_or_json, print_success, OutputFormat};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Config row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub fn execute(
    explicit_path: Option<&str>,
    format: OutputFormat,
    quiet: bool,
    action: ConfigAction,
) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(explicit_path, format),
        ConfigAction::Path => show_path(explicit_path),
        ConfigAction::Init { force } => init_config(explicit_path, force, quiet),
    }
}

fn resolve_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    match explicit_path {
        Some(raw) => Ok(expand_path(raw)),
        None => Ok(get_config_path()?),
    }
}

fn show_config(explicit_path: Option<&str>, format: OutputFormat) -> Result<()> {
    let (config, source, _) = AllowanceConfig::load(explicit_path)?;
    let source = source.to_string();

    let row = |key: &str, value: String| ConfigRow {
        key: key.to_string(),
        value,
        source: source.clone(),
    };

    let rows = vec![
        row("project_title", config.project_title.clone()),
        row("reset_hour_utc", config.reset_hour_utc.to_string()),
        row("daily_allowance", config.daily_allowance.to_string()),
        row("start_date", config.start_date.to_string()),
        row("stats_base_url", config.stats_base_url.clone()),
        row(
            "api_base_url",
            config.api_base_url.clone().unwrap_or_else(|| "Not set".to_string()),
        ),
    ];

    print_rows_or_json(&rows, &config, format)
}

fn show_path(explicit_path: Option<&str>) -> Result<()> {
    let path = resolve_path(explicit_path)?;
    // Always printed, even with --quiet: the path is the command's output
    println!("{}", path.display());
    Ok(())
}

fn init_config(explicit_path: Option<&str>, force: bool, quiet: bool) -> Result<()> {
    let path = resolve_path(explicit_path)?;

    if path.exists() && !force {
        print_error(&format!("Config already exists: {}", path.display()));
        print_info("Use --force to overwrite it", quiet);
        anyhow::bail!("config file already exists");
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&AllowanceConfig::default())?;
    std::fs::write(&path, json)?;
    print_success(&format!("Wrote default config to {}", path.display()), quiet);
    Ok(())
}
