//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which creates the `.gyt`
//! directory with an empty staging area, an empty history, and a default
//! configuration.
//!
//! Running `init` in an existing repository is not an error: it reports that
//! the repository is already initialized and leaves every file untouched.

use anyhow::{Context as _, Result};
use clap::Args;
use console::style;

use gyt::output::emoji;
use gyt::repository::Repository;

use super::Context;

/// Initialize a new gyt repository
#[derive(Args, Debug)]
pub struct InitArgs {}

/// Execute the `init` command.
pub fn execute(_args: InitArgs, ctx: &Context) -> Result<()> {
    let repo = Repository::new(&ctx.repo_root);
    let created = repo
        .init()
        .with_context(|| format!("Failed to initialize repository in {}", repo.root().display()))?;

    if created {
        println!(
            "{} {}",
            emoji(&ctx.output, "✅", "[OK]"),
            style("Initialized empty gyt repository in .gyt/").green()
        );
    } else {
        println!("{}", style("Repository already initialized.").yellow());
    }
    Ok(())
}
