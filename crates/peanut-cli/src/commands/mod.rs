//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod config;
pub mod history;
pub mod reset;
pub mod stats;

use anyhow::Result;
use chrono::{DateTime, Utc};
use peanut_core::{AllowanceConfig, DailyAllowanceTracker};

use crate::output::OutputFormat;

/// Shared context for all commands
pub struct Context {
    pub config: AllowanceConfig,
    pub tracker: DailyAllowanceTracker,
    pub format: OutputFormat,
    pub quiet: bool,
    /// The instant every command evaluates at
    pub now: DateTime<Utc>,
}

impl Context {
    /// Load configuration and pin "now" for this invocation
    pub fn load(
        config_path: Option<&str>,
        format: OutputFormat,
        quiet: bool,
        now: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let (config, source, path) = AllowanceConfig::load(config_path)?;
        match path {
            Some(path) => log::debug!("Using {} config from {}", source, path.display()),
            None => log::debug!("Using {} config", source),
        }
        let tracker = DailyAllowanceTracker::new(&config);

        Ok(Self {
            config,
            tracker,
            format,
            quiet,
            now: now.unwrap_or_else(Utc::now),
        })
    }
}

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_instant(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| format!("Invalid timestamp: {}. Use RFC 3339, e.g. 2025-02-03T10:00:00Z", s))
}
