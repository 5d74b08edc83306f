//! Stats provider module
//!
//! Narrow data-source seam for per-user peanut counters. The allowance
//! tracker never talks to a backend itself; it is handed a [`PeanutStats`]
//! snapshot fetched through one of these providers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ trait StatsProvider                                 │
//! │   fn provider_id() -> &str                          │
//! │   fn fetch_stats(fid) -> PeanutStats                │
//! │   fn is_available() -> bool                         │
//! └─────────────────────────────────────────────────────┘
//!          │
//!     ┌────┼──────────┐
//!     ▼    ▼          ▼
//! ┌────┐ ┌────┐ ┌────────┐
//! │File│ │HTTP│ │ Random │
//! └────┘ └────┘ └────────┘
//! ```
//!
//! # Adding a New Provider
//!
//! 1. Create a new module (e.g., `redis.rs`)
//! 2. Implement the `StatsProvider` trait
//! 3. Add a `ProviderKind` variant and wire it in `registry.rs`
//!
//! [`PeanutStats`]: crate::models::PeanutStats

pub mod file;
pub mod http;
pub mod provider;
pub mod random;
pub mod registry;

pub use file::FileStatsProvider;
pub use http::HttpStatsProvider;
pub use provider::{StatsError, StatsProvider};
pub use random::RandomStatsProvider;
pub use registry::{create_provider, ProviderKind, ProviderOptions};
