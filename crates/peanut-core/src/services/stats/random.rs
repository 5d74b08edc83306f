//! Demo stats provider
//!
//! Generates plausible counters for previews and demos: sent and received in
//! `50..150`, failed attempts in `0..5`. Seedable for reproducible output.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::provider::{StatsError, StatsProvider};
use crate::models::PeanutStats;

pub struct RandomStatsProvider {
    rng: Mutex<StdRng>,
    generated_at: DateTime<Utc>,
}

impl RandomStatsProvider {
    /// Unseeded generator; `generated_at` becomes every snapshot's `last_updated`
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            generated_at,
        }
    }

    pub fn with_seed(seed: u64, generated_at: DateTime<Utc>) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            generated_at,
        }
    }

    fn generate(&self, fid: u64) -> PeanutStats {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let sent = rng.gen_range(50..150);
        let received = rng.gen_range(50..150);
        let failed_attempts = rng.gen_range(0..5);

        PeanutStats::new(fid, self.generated_at)
            .with_counts(sent, received)
            .with_failed_attempts(failed_attempts)
    }
}

#[async_trait]
impl StatsProvider for RandomStatsProvider {
    fn provider_id(&self) -> &'static str {
        "random"
    }

    fn display_name(&self) -> &'static str {
        "Demo data"
    }

    async fn fetch_stats(&self, fid: u64) -> Result<PeanutStats, StatsError> {
        log::debug!("[allowance:provider] Generating demo stats for fid {}", fid);
        Ok(self.generate(fid))
    }

    async fn is_available(&self) -> bool {
        true
    }
}
