//! # peanut-core
//!
//! Core logic for the Peanut frame - shared by the CLI and any UI host.
//!
//! This crate provides:
//! - Data models (`models` module)
//! - Daily allowance bookkeeping and stats providers (`services` module)
//! - Configuration loading (`config` module)
//! - Unified error handling (`error` module)

pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-exports for convenience
pub use config::{AllowanceConfig, ConfigSource};
pub use error::{Error, Result};
pub use models::PeanutStats;

pub use services::{
    create_provider, days_since, format_time_remaining, next_reset_boundary_at, stats_url,
    time_remaining, AllowanceSummary, DailyAllowanceTracker, FileStatsProvider,
    HttpStatsProvider, ProviderKind, ProviderOptions, RandomStatsProvider, StatsError,
    StatsProvider,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
