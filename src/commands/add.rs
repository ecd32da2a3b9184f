//! # Add Command Implementation
//!
//! This module implements the `add` subcommand, which records a milestone in
//! the staging area.
//!
//! ## Functionality
//!
//! - **Message Argument**: Stage a milestone with free-text message
//! - **Default Milestone**: `--all`/`-a` or a message of `.` stages "Daily progress"
//! - **Tags**: Label the milestone with one or more `--tag` values

use anyhow::Result;
use clap::Args;
use console::style;

use gyt::defaults::DEFAULT_MILESTONE_MESSAGE;
use gyt::models::Milestone;
use gyt::suggestions;

use super::Context;

/// Add a milestone to the staging area
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Milestone message ('.' adds the default milestone)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Add a default milestone for today
    #[arg(short, long)]
    pub all: bool,

    /// Tag the milestone (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

/// Execute the `add` command.
pub fn execute(args: AddArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.open_repo()?;

    let message = resolve_message(&args)?;
    let milestone = Milestone::new(message)
        .map_err(suggestions::explain)?
        .with_tags(&args.tags);

    let text = milestone.message.clone();
    repo.add_milestone(milestone)?;
    println!("{} {}", style("Added milestone:").green(), text);
    Ok(())
}

/// Pick the milestone text from the arguments.
fn resolve_message(args: &AddArgs) -> Result<&str> {
    match args.message.as_deref() {
        _ if args.all => Ok(DEFAULT_MILESTONE_MESSAGE),
        Some(".") => Ok(DEFAULT_MILESTONE_MESSAGE),
        Some(message) => Ok(message),
        None => Err(suggestions::missing_milestone_message()),
    }
}
