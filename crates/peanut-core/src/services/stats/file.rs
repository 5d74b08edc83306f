//! File-backed stats provider
//!
//! Reads a JSON document holding either one snapshot object or an array of
//! snapshots, and returns the entry whose `fid` matches.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{StatsError, StatsProvider};
use crate::models::PeanutStats;

#[derive(Deserialize)]
#[serde(untagged)]
enum StatsDocument {
    Many(Vec<PeanutStats>),
    One(PeanutStats),
}

impl StatsDocument {
    fn into_vec(self) -> Vec<PeanutStats> {
        match self {
            StatsDocument::Many(all) => all,
            StatsDocument::One(single) => vec![single],
        }
    }
}

pub struct FileStatsProvider {
    path: PathBuf,
}

impl FileStatsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load every snapshot in the file
    pub async fn load_all(&self) -> Result<Vec<PeanutStats>, StatsError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let document: StatsDocument = serde_json::from_str(&content)?;
        Ok(document.into_vec())
    }
}

#[async_trait]
impl StatsProvider for FileStatsProvider {
    fn provider_id(&self) -> &'static str {
        "file"
    }

    fn display_name(&self) -> &'static str {
        "Stats file"
    }

    async fn fetch_stats(&self, fid: u64) -> Result<PeanutStats, StatsError> {
        log::debug!(
            "[allowance:provider] Reading stats for fid {} from {}",
            fid,
            self.path.display()
        );

        self.load_all()
            .await?
            .into_iter()
            .find(|s| s.fid == fid)
            .ok_or(StatsError::NotFound(fid))
    }

    async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}
