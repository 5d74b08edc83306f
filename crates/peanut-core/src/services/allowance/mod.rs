//! Daily allowance module
//!
//! Turns a stats snapshot plus an explicit "now" into the values a frame
//! displays: the next daily reset, the countdown to it, the clamped
//! allowance usage and the number of tracked days.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────────────────┐
//! │ StatsProvider    │ ───▶ │ DailyAllowanceTracker        │
//! │ (file/http/rand) │      │   - next_reset_boundary()    │
//! └──────────────────┘      │   - time_until_reset()       │
//!          ▲                │   - days_tracked()           │
//!          │                │   - summarize()              │
//!      caller supplies      └──────────────┬───────────────┘
//!      fid and "now"                       ▼
//!                                   AllowanceSummary
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use peanut_core::services::allowance::DailyAllowanceTracker;
//!
//! let tracker = DailyAllowanceTracker::new(&config);
//! let summary = tracker.summarize(&stats, chrono::Utc::now());
//! println!("Daily Allowance ({} left)", summary.time_remaining);
//! ```

pub mod tracker;
pub mod types;

pub use tracker::{
    days_since,
    format_time_remaining,
    next_reset_boundary_at,
    stats_url,
    time_remaining,
    DailyAllowanceTracker,
};

pub use types::AllowanceSummary;
