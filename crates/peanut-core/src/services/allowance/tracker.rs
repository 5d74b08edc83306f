//! Daily allowance tracker
//!
//! Pure reset-window bookkeeping: the next reset boundary, the countdown to
//! it, day counts since the start of tracking and the clamped allowance
//! accounting. Every function takes "now" explicitly; nothing in here reads
//! the clock.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use super::types::AllowanceSummary;
use crate::config::AllowanceConfig;
use crate::models::PeanutStats;

// ============================================================================
// Constants
// ============================================================================

const MILLIS_PER_MINUTE: i64 = 60 * 1000;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

// ============================================================================
// Free functions
// ============================================================================

/// Next instant at `reset_hour_utc`:00:00.000 UTC strictly after `now`
///
/// Today's boundary is used when it is still ahead; a boundary equal to
/// `now` counts as passed and rolls to tomorrow.
pub fn next_reset_boundary_at(now: DateTime<Utc>, reset_hour_utc: u32) -> DateTime<Utc> {
    let reset_time = NaiveTime::from_hms_opt(reset_hour_utc.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let today = now.date_naive().and_time(reset_time).and_utc();

    if today <= now {
        today
            .checked_add_signed(Duration::days(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    } else {
        today
    }
}

/// Time from `now` until `reset_boundary`, never negative
pub fn time_remaining(reset_boundary: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let diff = reset_boundary - now;
    if diff < Duration::zero() {
        Duration::zero()
    } else {
        diff
    }
}

/// Format a duration as `{hours}h {minutes}m`
///
/// Seconds are truncated. Negative durations format as `0h 0m`.
pub fn format_time_remaining(duration: Duration) -> String {
    let total_ms = duration.num_milliseconds().max(0);
    let hours = total_ms / MILLIS_PER_HOUR;
    let minutes = (total_ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    format!("{}h {}m", hours, minutes)
}

/// Whole days between `anchor` and `now`, floored
///
/// Negative when `anchor` is after `now`.
pub fn days_since(anchor: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - anchor).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Public stats page URL for a user
pub fn stats_url(base_url: &str, fid: u64) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), fid)
}

// ============================================================================
// DailyAllowanceTracker
// ============================================================================

/// Derives allowance display values from stats snapshots
///
/// Holds only configuration; safe to share across threads.
#[derive(Debug, Clone)]
pub struct DailyAllowanceTracker {
    reset_hour_utc: u32,
    daily_allowance: u32,
    start_date: NaiveDate,
    stats_base_url: String,
}

impl Default for DailyAllowanceTracker {
    fn default() -> Self {
        Self::new(&AllowanceConfig::default())
    }
}

impl DailyAllowanceTracker {
    /// Create a tracker from configuration
    pub fn new(config: &AllowanceConfig) -> Self {
        Self {
            reset_hour_utc: config.reset_hour_utc.min(23),
            daily_allowance: config.daily_allowance,
            start_date: config.start_date,
            stats_base_url: config.stats_base_url.clone(),
        }
    }

    pub fn reset_hour_utc(&self) -> u32 {
        self.reset_hour_utc
    }

    pub fn daily_allowance(&self) -> u32 {
        self.daily_allowance
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Next reset boundary strictly after `now`
    pub fn next_reset_boundary(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        next_reset_boundary_at(now, self.reset_hour_utc)
    }

    /// Countdown from `now` to the next reset
    pub fn time_until_reset(&self, now: DateTime<Utc>) -> Duration {
        time_remaining(self.next_reset_boundary(now), now)
    }

    /// Whole days of history since the configured start date
    pub fn days_tracked(&self, now: DateTime<Utc>) -> i64 {
        let anchor = self.start_date.and_time(NaiveTime::MIN).and_utc();
        let days = days_since(anchor, now);
        if days < 0 {
            log::warn!(
                "[allowance:tracker] start date {} is after {}, day count is {}",
                self.start_date,
                now,
                days
            );
        }
        days
    }

    /// Usage counted against the allowance, clamped to the ceiling
    pub fn consumed(&self, stats: &PeanutStats) -> u32 {
        stats.total_points().min(self.daily_allowance)
    }

    /// Allowance left before the next reset
    pub fn remaining(&self, stats: &PeanutStats) -> u32 {
        self.daily_allowance - self.consumed(stats)
    }

    /// Remaining allowance as a percentage of the ceiling
    pub fn progress_percent(&self, stats: &PeanutStats) -> f64 {
        if self.daily_allowance == 0 {
            return 0.0;
        }
        (self.remaining(stats) as f64 * 100.0 / self.daily_allowance as f64).clamp(0.0, 100.0)
    }

    /// Derive every display value for `stats` at `now`
    pub fn summarize(&self, stats: &PeanutStats, now: DateTime<Utc>) -> AllowanceSummary {
        let next_reset = self.next_reset_boundary(now);
        let remaining_time = time_remaining(next_reset, now);

        log::debug!(
            "[allowance:tracker] fid {} next reset {} ({} left)",
            stats.fid,
            next_reset,
            format_time_remaining(remaining_time)
        );

        AllowanceSummary {
            fid: stats.fid,
            display_name: stats.display_name(),
            total_points: stats.total_points(),
            sent: stats.sent,
            received: stats.received,
            daily_allowance: self.daily_allowance,
            consumed: self.consumed(stats),
            remaining: self.remaining(stats),
            progress_percent: self.progress_percent(stats),
            failed_attempts: stats.failed_attempts,
            next_reset,
            time_remaining: format_time_remaining(remaining_time),
            time_remaining_secs: remaining_time.num_seconds(),
            days_tracked: self.days_tracked(now),
            tracking_since: self.start_date,
            stats_url: stats_url(&self.stats_base_url, stats.fid),
            last_updated: stats.last_updated,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
