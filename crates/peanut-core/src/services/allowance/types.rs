//! Allowance display types
//!
//! Plain values derived from a stats snapshot and "now", ready for a UI
//! layer to render.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Summary
// ============================================================================

/// Everything the frame shows for one user at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllowanceSummary {
    /// Farcaster user id
    pub fid: u64,
    /// Username, or `FID: {fid}` when the user has none
    pub display_name: String,
    /// Sent plus received
    pub total_points: u32,
    pub sent: u32,
    pub received: u32,
    /// Configured daily ceiling
    pub daily_allowance: u32,
    /// Usage counted against the allowance, never above the ceiling
    pub consumed: u32,
    /// Allowance left until the next reset
    pub remaining: u32,
    /// Remaining allowance as a percentage (0.0 - 100.0)
    pub progress_percent: f64,
    pub failed_attempts: u32,
    /// Next daily reset instant
    pub next_reset: DateTime<Utc>,
    /// Countdown to `next_reset`, formatted as `{h}h {m}m`
    pub time_remaining: String,
    /// Countdown to `next_reset` in whole seconds
    pub time_remaining_secs: i64,
    /// Whole days since `tracking_since`
    pub days_tracked: i64,
    pub tracking_since: NaiveDate,
    /// Public stats page for this user
    pub stats_url: String,
    /// When the underlying counters last changed
    pub last_updated: DateTime<Utc>,
}

impl AllowanceSummary {
    /// Whether the whole allowance has been used
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
