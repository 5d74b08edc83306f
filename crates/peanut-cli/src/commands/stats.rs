//! Stats command
//!
//! Fetch a user's peanut stats from a provider and show the derived
//! allowance summary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use peanut_core::{
    create_provider, AllowanceSummary, ProviderKind, ProviderOptions, StatsError,
};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_info, print_rows_or_json, progress_bar, PROGRESS_BAR_WIDTH};

#[derive(Args)]
pub struct StatsArgs {
    /// Farcaster user id
    pub fid: u64,

    /// Stats source: file, http or random (demo data)
    #[arg(long)]
    pub source: Option<ProviderKind>,

    /// Stats JSON file (implies --source file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Stats service base URL (implies --source http)
    #[arg(long)]
    pub url: Option<String>,

    /// Seed for demo data
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Metric row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct MetricRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl MetricRow {
    fn new(metric: &str, value: impl Into<String>) -> Self {
        Self {
            metric: metric.to_string(),
            value: value.into(),
        }
    }
}

/// Pick the provider from explicit flags, then from what was supplied
pub fn resolve_kind(ctx: &Context, args: &StatsArgs) -> Result<ProviderKind> {
    if let Some(kind) = args.source {
        return Ok(kind);
    }
    if args.file.is_some() {
        return Ok(ProviderKind::File);
    }
    if args.url.is_some() || ctx.config.api_base_url.is_some() {
        return Ok(ProviderKind::Http);
    }
    Err(anyhow::anyhow!(
        "No stats source configured. Pass --file, --url, set api_base_url in the config, or use --source random for demo data"
    ))
}

pub fn summary_rows(summary: &AllowanceSummary) -> Vec<MetricRow> {
    vec![
        MetricRow::new("User", summary.display_name.clone()),
        MetricRow::new("FID", summary.fid.to_string()),
        MetricRow::new("Total Points 🥜", summary.total_points.to_string()),
        MetricRow::new("Sent 🥜", summary.sent.to_string()),
        MetricRow::new("Received 🥜", summary.received.to_string()),
        MetricRow::new(
            "Daily Allowance",
            format!(
                "{}/{} left ({} until reset)",
                summary.remaining, summary.daily_allowance, summary.time_remaining
            ),
        ),
        MetricRow::new(
            "Progress",
            format!(
                "{} {:.0}%",
                progress_bar(summary.progress_percent, PROGRESS_BAR_WIDTH),
                summary.progress_percent
            ),
        ),
        MetricRow::new("Failed Attempts", summary.failed_attempts.to_string()),
        MetricRow::new("Next Reset", summary.next_reset.to_rfc3339()),
        MetricRow::new("Stats Page", summary.stats_url.clone()),
        MetricRow::new(
            "History",
            format!(
                "{} days since {}",
                summary.days_tracked, summary.tracking_since
            ),
        ),
    ]
}

pub async fn execute(ctx: &Context, args: StatsArgs) -> Result<()> {
    let kind = resolve_kind(ctx, &args)?;
    let options = ProviderOptions {
        file: args.file.clone(),
        url: args.url.clone(),
        seed: args.seed,
    };

    let provider = create_provider(kind, &options, &ctx.config, ctx.now)?;
    log::info!("Fetching stats for fid {} from {}", args.fid, provider.display_name());

    let stats = match provider.fetch_stats(args.fid).await {
        Ok(stats) => stats,
        Err(StatsError::NotFound(fid)) => anyhow::bail!("No stats found for fid {}", fid),
        Err(e) => return Err(e.into()),
    };

    let summary = ctx.tracker.summarize(&stats, ctx.now);

    if ctx.format == crate::output::OutputFormat::Table {
        print_info(&format!("🥜 {}", ctx.config.project_title), ctx.quiet);
    }
    print_rows_or_json(&summary_rows(&summary), &summary, ctx.format)
}
