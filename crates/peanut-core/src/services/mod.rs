//! Services module

pub mod allowance;
pub mod stats;

pub use allowance::{
    days_since, format_time_remaining, next_reset_boundary_at, stats_url, time_remaining,
    AllowanceSummary, DailyAllowanceTracker,
};
pub use stats::{
    create_provider, FileStatsProvider, HttpStatsProvider, ProviderKind, ProviderOptions,
    RandomStatsProvider, StatsError, StatsProvider,
};
