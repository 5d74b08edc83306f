//! Allowance configuration
//!
//! Loaded from a JSON file. Resolution order:
//! explicit path (`--config` / `PEANUT_CONFIG`) > project config dir > defaults.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "PEANUT_CONFIG";

/// Config file name inside the project config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_PROJECT_TITLE: &str = "Peanut Stats";

/// Hour of day (UTC) at which the daily counters reset
pub const DEFAULT_RESET_HOUR_UTC: u32 = 11;

/// Daily peanut allowance
pub const DEFAULT_DAILY_ALLOWANCE: u32 = 30;

pub const DEFAULT_STATS_BASE_URL: &str = "https://peanuthub.vercel.app";

/// Date the peanut history starts counting from
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 1).unwrap_or(NaiveDate::MIN)
}

/// Where the effective configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSource {
    /// `PEANUT_CONFIG` or an explicit path
    Env,
    /// The project config directory
    File,
    /// Built-in defaults
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Env => write!(f, "env"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowanceConfig {
    /// Heading shown above the stats
    pub project_title: String,
    /// Hour of day (0-23, UTC) of the daily reset
    pub reset_hour_utc: u32,
    /// Ceiling of the daily allowance
    pub daily_allowance: u32,
    /// First day of tracked history
    pub start_date: NaiveDate,
    /// Base URL of the public per-user stats page
    pub stats_base_url: String,
    /// Base URL of the stats service used by the HTTP provider
    pub api_base_url: Option<String>,
}

impl Default for AllowanceConfig {
    fn default() -> Self {
        Self {
            project_title: DEFAULT_PROJECT_TITLE.to_string(),
            reset_hour_utc: DEFAULT_RESET_HOUR_UTC,
            daily_allowance: DEFAULT_DAILY_ALLOWANCE,
            start_date: default_start_date(),
            stats_base_url: DEFAULT_STATS_BASE_URL.to_string(),
            api_base_url: None,
        }
    }
}

impl AllowanceConfig {
    /// Reject values the tracker cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.reset_hour_utc > 23 {
            return Err(Error::validation(format!(
                "reset_hour_utc must be 0-23, got {}",
                self.reset_hour_utc
            )));
        }
        if self.stats_base_url.trim().is_empty() {
            return Err(Error::validation("stats_base_url must not be empty"));
        }
        Ok(())
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AllowanceConfig = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        log::debug!("[config] Loaded {}", path.display());
        Ok(config)
    }

    /// Resolve and load the effective configuration
    ///
    /// A missing file falls back to defaults; a malformed one is an error.
    /// The returned path is the file that was (or would have been) read.
    pub fn load(explicit: Option<&str>) -> Result<(Self, ConfigSource, Option<PathBuf>)> {
        let (path, source) = resolve_config_path(explicit)?;

        if path.exists() {
            let config = Self::from_file(&path)?;
            return Ok((config, source, Some(path)));
        }

        log::debug!("[config] No config at {}, using defaults", path.display());
        match source {
            ConfigSource::Env => Ok((Self::default(), ConfigSource::Env, Some(path))),
            _ => Ok((Self::default(), ConfigSource::Default, None)),
        }
    }
}

/// Get the config file path
/// Priority: PEANUT_CONFIG env var > project config directory
pub fn get_config_path() -> Result<PathBuf> {
    resolve_config_path(None).map(|(path, _)| path)
}

/// Explicit path > PEANUT_CONFIG > project config directory
fn resolve_config_path(explicit: Option<&str>) -> Result<(PathBuf, ConfigSource)> {
    if let Some(raw) = explicit {
        return Ok((expand_path(raw), ConfigSource::Env));
    }
    if let Ok(raw) = std::env::var(CONFIG_ENV_VAR) {
        return Ok((expand_path(&raw), ConfigSource::Env));
    }
    Ok((default_config_path()?, ConfigSource::File))
}

fn default_config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "peanut", "Peanut")
        .ok_or_else(|| Error::config("Could not determine project directories"))?;

    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
