//! # Stats Command Implementation
//!
//! This module implements the `stats` subcommand, which totals commits and
//! milestones over a trailing window of days.

use anyhow::Result;
use chrono::Local;
use clap::Args;
use console::style;
use tabled::{Table, Tabled};

use gyt::defaults::DEFAULT_STATS_DAYS;
use gyt::stats::Stats;

use super::Context;

/// Show milestone statistics
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Number of days to show stats for
    #[arg(short, long, value_name = "DAYS", default_value_t = DEFAULT_STATS_DAYS)]
    pub days: u32,
}

/// Execute the `stats` command.
pub fn execute(args: StatsArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.open_repo()?;
    let commits = repo.commits()?;

    if commits.is_empty() {
        println!("{}", style("No commits yet.").yellow());
        return Ok(());
    }

    let stats = Stats::compute(&commits, args.days, Local::now());
    print!("{}", render_stats(&stats));
    Ok(())
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn render_stats(stats: &Stats) -> String {
    let mut rows = vec![
        StatRow {
            metric: "Total Commits",
            value: stats.total_commits.to_string(),
        },
        StatRow {
            metric: "Total Milestones",
            value: stats.total_milestones.to_string(),
        },
    ];
    if let Some(average) = stats.average_milestones() {
        rows.push(StatRow {
            metric: "Avg Milestones/Commit",
            value: format!("{:.1}", average),
        });
    }
    format!(
        "Stats for last {} days\n{}\n",
        stats.days,
        Table::new(rows)
    )
}
