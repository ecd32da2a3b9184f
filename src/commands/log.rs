//! # Log Command Implementation
//!
//! This module implements the `log` subcommand, which shows commit history
//! with the most recent commit first.
//!
//! ## Functionality
//!
//! - **Limit**: `--limit`/`-n` caps the number of commits shown (0 shows all)
//! - **JSON Output**: `--json` prints the selected commits as a JSON array

use anyhow::Result;
use clap::Args;
use console::style;

use gyt::defaults::DEFAULT_LOG_LIMIT;
use gyt::models::Commit;

use super::status::format_milestone;
use super::Context;

/// Show commit history
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Number of commits to show (0 shows all)
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_LOG_LIMIT)]
    pub limit: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Execute the `log` command.
pub fn execute(args: LogArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.open_repo()?;
    let commits = repo.commits()?;
    let selected = select_recent(&commits, args.limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("{}", style("No commits yet.").yellow());
        return Ok(());
    }

    for commit in selected {
        print!("{}", render_commit(commit));
    }
    Ok(())
}

/// The last `limit` commits, newest first. A limit of 0 selects everything.
fn select_recent(commits: &[Commit], limit: usize) -> Vec<&Commit> {
    let start = if limit == 0 {
        0
    } else {
        commits.len().saturating_sub(limit)
    };
    commits[start..].iter().rev().collect()
}

fn render_commit(commit: &Commit) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        style(format!("commit {}", commit.short_hash())).yellow()
    ));
    out.push_str(&format!(
        "Date:   {}\n",
        commit.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("\n    {}\n\n", commit.message));
    for milestone in &commit.milestones {
        out.push_str(&format!("    • {}\n", format_milestone(milestone)));
    }
    out
}
