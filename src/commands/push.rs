//! # Push Command Implementation
//!
//! This module implements the `push` subcommand. It resolves the remote,
//! validates it, and reports what would be sent. Synchronisation with a
//! remote service is not available yet, so no network request is made.

use anyhow::Result;
use clap::Args;
use console::style;
use url::Url;

use gyt::error::Error;
use gyt::suggestions;

use super::Context;

/// Push commits to the configured remote
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Remote URL to push to (overrides remote.url)
    #[arg(long, value_name = "URL")]
    pub remote: Option<String>,
}

/// Execute the `push` command.
pub fn execute(args: PushArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.open_repo()?;
    let config = repo.config()?;

    let raw = args
        .remote
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| config.remote_url())
        .ok_or_else(|| suggestions::explain(Error::NoRemote))?;
    let remote = parse_remote(raw)?;

    let commits = repo.commits()?;
    if commits.is_empty() {
        println!("{}", style("No commits to push.").yellow());
        return Ok(());
    }

    log::info!("Resolved remote {}", remote);
    println!(
        "{}",
        style(format!("Pushing {} commit(s) to {}...", commits.len(), remote)).yellow()
    );
    println!(
        "{}",
        style("Note: Remote push is not available yet; nothing was sent.").dim()
    );
    Ok(())
}

/// Parse and check a remote URL. Only http(s) remotes are accepted.
fn parse_remote(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::InvalidRemote {
        url: raw.to_string(),
        message: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidRemote {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", scheme),
        }
        .into()),
    }
}
