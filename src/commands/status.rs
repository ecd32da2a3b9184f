//! # Status Command Implementation
//!
//! This module implements the `status` subcommand, which lists the staged
//! milestones waiting for the next commit. It is a read-only operation.

use anyhow::Result;
use clap::Args;
use console::style;

use gyt::models::Milestone;

use super::Context;

/// Show the status of the repository
#[derive(Args, Debug)]
pub struct StatusArgs {}

/// Execute the `status` command.
pub fn execute(_args: StatusArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.open_repo()?;
    let staged = repo.staged_milestones()?;

    println!("{}", style("Gyt Status").bold());

    if staged.is_empty() {
        println!();
        println!("{}", style("No milestones staged").dim());
    } else {
        println!();
        println!("{}", style("Staged milestones:").green());
        for (i, milestone) in staged.iter().enumerate() {
            println!("  {}. {}", i + 1, format_milestone(milestone));
        }
    }

    println!();
    println!("{}", style("Use 'gyt add <message>' to stage milestones").dim());
    println!(
        "{}",
        style("Use 'gyt commit -m \"message\"' to commit staged milestones").dim()
    );
    Ok(())
}

/// Milestone text followed by its tags, e.g. `Wrote tests [testing, ci]`.
pub(crate) fn format_milestone(milestone: &Milestone) -> String {
    if milestone.tags.is_empty() {
        milestone.message.clone()
    } else {
        format!("{} [{}]", milestone.message, milestone.tags.join(", "))
    }
}
