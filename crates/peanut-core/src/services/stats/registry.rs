//! Stats provider registry
//!
//! Maps a provider kind plus its options to a boxed [`StatsProvider`].

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::provider::{StatsError, StatsProvider};
use super::{FileStatsProvider, HttpStatsProvider, RandomStatsProvider};
use crate::config::AllowanceConfig;

/// Kind of stats provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Local JSON file
    File,
    /// Remote stats service
    Http,
    /// Generated demo data
    Random,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::File => write!(f, "file"),
            ProviderKind::Http => write!(f, "http"),
            ProviderKind::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(ProviderKind::File),
            "http" | "api" => Ok(ProviderKind::Http),
            "random" | "mock" | "demo" => Ok(ProviderKind::Random),
            _ => Err(format!("Unknown provider: {}. Use 'file', 'http' or 'random'", s)),
        }
    }
}

/// Per-provider settings collected from the command line or a host UI
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
    /// Stats file for the file provider
    pub file: Option<PathBuf>,
    /// Service URL for the http provider; falls back to `api_base_url`
    pub url: Option<String>,
    /// Seed for the random provider
    pub seed: Option<u64>,
}

/// Build the provider for `kind`
///
/// `now` stamps generated demo snapshots.
pub fn create_provider(
    kind: ProviderKind,
    options: &ProviderOptions,
    config: &AllowanceConfig,
    now: DateTime<Utc>,
) -> Result<Box<dyn StatsProvider>, StatsError> {
    log::debug!("[allowance:provider] Creating {} provider", kind);

    match kind {
        ProviderKind::File => {
            let path = options
                .file
                .clone()
                .ok_or_else(|| StatsError::Unavailable("file provider needs a stats file path".to_string()))?;
            Ok(Box::new(FileStatsProvider::new(path)))
        }
        ProviderKind::Http => {
            let url = options
                .url
                .clone()
                .or_else(|| config.api_base_url.clone())
                .ok_or_else(|| StatsError::Unavailable("http provider needs a service URL".to_string()))?;
            Ok(Box::new(HttpStatsProvider::new(url)))
        }
        ProviderKind::Random => {
            let provider = match options.seed {
                Some(seed) => RandomStatsProvider::with_seed(seed, now),
                None => RandomStatsProvider::new(now),
            };
            Ok(Box::new(provider))
        }
    }
}
