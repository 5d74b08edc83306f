//! Data models for the Peanut frame

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user peanut counters for the current daily window
///
/// Produced by a [`StatsProvider`](crate::services::stats::StatsProvider);
/// the core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeanutStats {
    /// Farcaster user id
    pub fid: u64,
    /// Display name, if the user has one
    #[serde(default)]
    pub username: Option<String>,
    /// Peanuts sent since the last reset
    pub sent: u32,
    /// Peanuts received since the last reset
    pub received: u32,
    /// Sends that were rejected since the last reset
    #[serde(default)]
    pub failed_attempts: u32,
    /// When the counters last changed
    pub last_updated: DateTime<Utc>,
}

impl PeanutStats {
    /// Create an empty snapshot for a user
    pub fn new(fid: u64, last_updated: DateTime<Utc>) -> Self {
        Self {
            fid,
            username: None,
            sent: 0,
            received: 0,
            failed_attempts: 0,
            last_updated,
        }
    }

    /// Set the username for this snapshot
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the sent/received counters
    pub fn with_counts(mut self, sent: u32, received: u32) -> Self {
        self.sent = sent;
        self.received = received;
        self
    }

    /// Set the failed attempt counter
    pub fn with_failed_attempts(mut self, failed_attempts: u32) -> Self {
        self.failed_attempts = failed_attempts;
        self
    }

    /// Sent plus received, saturating at `u32::MAX`
    pub fn total_points(&self) -> u32 {
        self.sent.saturating_add(self.received)
    }

    /// Username when set and non-empty, otherwise `FID: {fid}`
    pub fn display_name(&self) -> String {
        match self.username.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("FID: {}", self.fid),
        }
    }
}
