//! Table / JSON rendering shared by every command

use std::fmt::Display;

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Width of the text progress bar in characters
pub const PROGRESS_BAR_WIDTH: usize = 20;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Use 'table' or 'json'", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Print rows as a table, or the JSON value as JSON
///
/// Table rows are a display projection; JSON output carries the full value.
pub fn print_rows_or_json<T, J>(rows: &[T], json: &J, format: OutputFormat) -> anyhow::Result<()>
where
    T: Tabled,
    J: Serialize + ?Sized,
{
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(json)?,
        OutputFormat::Table if rows.is_empty() => "Nothing to show.".to_string(),
        OutputFormat::Table => Table::new(rows).to_string(),
    };
    println!("{}", rendered);
    Ok(())
}

/// One value, one table row
pub fn print_single<T>(data: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    print_rows_or_json(std::slice::from_ref(data), data, format)
}

/// Green confirmation on stdout, silenced by --quiet
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message.green());
    }
}

/// Red message on stderr, never silenced
pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

/// Plain line on stdout, silenced by --quiet
pub fn print_info(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Render a percentage (0-100) as a fixed-width text bar
pub fn progress_bar(percent: f64, width: usize) -> String {
    let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
