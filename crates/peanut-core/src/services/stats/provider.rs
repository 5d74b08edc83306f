//! Stats provider trait and error types
//!
//! Defines the interface that stats data sources must implement.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::PeanutStats;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when fetching peanut stats
#[derive(Error, Debug)]
pub enum StatsError {
    /// No stats exist for this user
    #[error("No stats for fid {0}")]
    NotFound(u64),

    /// Provider is not configured
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// Stats service returned an error
    #[error("API error: {0}")]
    ApiError(String),

    /// Failed to parse stats data
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(String),

    /// I/O error (e.g., reading a stats file)
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for StatsError {
    fn from(err: std::io::Error) -> Self {
        StatsError::IoError(err.to_string())
    }
}

impl From<reqwest::Error> for StatsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StatsError::NetworkError("Request timed out".to_string())
        } else if err.is_connect() {
            StatsError::NetworkError("Connection failed".to_string())
        } else if err.is_decode() {
            StatsError::ParseError(err.to_string())
        } else if err.is_status() {
            match err.status() {
                Some(status) => StatsError::ApiError(format!("HTTP {}", status)),
                None => StatsError::NetworkError(err.to_string()),
            }
        } else {
            StatsError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        StatsError::ParseError(err.to_string())
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Source of per-user peanut stats
///
/// The allowance tracker depends only on this trait; concrete backends
/// (a stats service, a local file, the demo generator) implement it.
///
/// # Example Implementation
///
/// ```ignore
/// use async_trait::async_trait;
/// use peanut_core::models::PeanutStats;
/// use peanut_core::services::stats::{StatsError, StatsProvider};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl StatsProvider for MyProvider {
///     fn provider_id(&self) -> &'static str {
///         "my_provider"
///     }
///
///     async fn fetch_stats(&self, fid: u64) -> Result<PeanutStats, StatsError> {
///         Err(StatsError::NotFound(fid))
///     }
///
///     async fn is_available(&self) -> bool {
///         true
///     }
/// }
/// ```
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "file" or "http"
    fn provider_id(&self) -> &'static str;

    /// Human-readable display name. Defaults to the provider_id.
    fn display_name(&self) -> &'static str {
        self.provider_id()
    }

    /// Fetch the current stats snapshot for a user
    ///
    /// # Errors
    ///
    /// - `NotFound` when the source has no record for `fid`
    /// - `NetworkError`, `ApiError`, `IoError` when the source can't be read
    /// - `ParseError` when the data is malformed
    async fn fetch_stats(&self, fid: u64) -> Result<PeanutStats, StatsError>;

    /// Quick check that the provider is configured; no network requests
    async fn is_available(&self) -> bool;
}

// ============================================================================
// Tests
// ============================================================================
