//! # Commit Command Implementation
//!
//! This module implements the `commit` subcommand, which groups every staged
//! milestone into a new commit, appends it to the history, and clears the
//! staging area.

use anyhow::Result;
use clap::Args;
use console::style;

use gyt::suggestions;

use super::Context;

/// Commit staged milestones
#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short, long, value_name = "MESSAGE")]
    pub message: String,
}

/// Execute the `commit` command.
///
/// Fails when nothing is staged or the message is blank; in both cases the
/// staging area is left as it was.
pub fn execute(args: CommitArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.open_repo()?;

    let commit = repo
        .commit_staged(&args.message)
        .map_err(suggestions::explain)?;

    println!(
        "{} {}",
        style(format!("Committed {} milestone(s):", commit.milestones.len())).green(),
        commit.message
    );
    println!("{}", style(format!("Commit hash: {}", commit.short_hash())).dim());
    Ok(())
}
