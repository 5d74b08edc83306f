//! History command
//!
//! Show the tracking start date and how many days of history exist.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_info, print_single};

#[derive(Debug, Serialize, Tabled)]
pub struct HistoryRow {
    #[tabled(rename = "Tracking Since")]
    pub tracking_since: NaiveDate,
    #[tabled(rename = "Days")]
    pub days: i64,
}

pub fn execute(ctx: &Context) -> Result<()> {
    let row = HistoryRow {
        tracking_since: ctx.tracker.start_date(),
        days: ctx.tracker.days_tracked(ctx.now),
    };

    print_single(&row, ctx.format)?;

    if ctx.format == crate::output::OutputFormat::Table {
        print_info(
            &format!(
                "Tracking since {}\n{} days of 🥜 history",
                row.tracking_since.format("%b %-d, %Y"),
                row.days
            ),
            ctx.quiet,
        );
    }

    Ok(())
}
