//! Reset command
//!
//! Show the next daily reset boundary and the countdown to it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use peanut_core::format_time_remaining;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::print_single;

#[derive(Debug, Serialize, Tabled)]
pub struct ResetRow {
    #[tabled(rename = "Now (UTC)")]
    pub now: DateTime<Utc>,
    #[tabled(rename = "Next Reset (UTC)")]
    pub next_reset: DateTime<Utc>,
    #[tabled(rename = "Time Left")]
    pub time_remaining: String,
    #[tabled(skip)]
    pub time_remaining_secs: i64,
    #[tabled(rename = "Reset Hour (UTC)")]
    pub reset_hour_utc: u32,
}

pub fn build_row(ctx: &Context) -> ResetRow {
    let next_reset = ctx.tracker.next_reset_boundary(ctx.now);
    let left = ctx.tracker.time_until_reset(ctx.now);

    ResetRow {
        now: ctx.now,
        next_reset,
        time_remaining: format_time_remaining(left),
        time_remaining_secs: left.num_seconds(),
        reset_hour_utc: ctx.tracker.reset_hour_utc(),
    }
}

pub fn execute(ctx: &Context) -> Result<()> {
    let row = build_row(ctx);
    print_single(&row, ctx.format)
}
