//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Errors should tell users what went
//! wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gyt::suggestions;
//!
//! let repo = Repository::open(&root).map_err(suggestions::explain)?;
//! ```

use std::path::Path;

use crate::error::Error;

/// Generate an error for a directory that has no `.gyt` repository.
pub fn not_a_repository(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Not a gyt repository: {path}\n\n\
         hint: Run 'gyt init' to create a repository here\n\
         hint: Use --repo <DIR> or set GYT_DIR to point at an existing repository",
        path = path.display()
    )
}

/// Generate an error for `commit` with an empty staging area.
pub fn nothing_staged() -> anyhow::Error {
    anyhow::anyhow!(
        "No milestones staged\n\n\
         hint: Use 'gyt add <message>' to stage a milestone first"
    )
}

/// Generate an error for `add` without a message.
pub fn missing_milestone_message() -> anyhow::Error {
    anyhow::anyhow!(
        "Please provide a milestone message\n\n\
         hint: gyt add \"Finished the parser\"\n\
         hint: Use --all/-a (or '.') to add the default 'Daily progress' milestone"
    )
}

/// Generate an error for `push` without a remote.
pub fn no_remote() -> anyhow::Error {
    anyhow::anyhow!(
        "No remote configured\n\n\
         hint: Use 'gyt config remote.url <url>' to set one\n\
         hint: Or pass --remote <url> for a single push"
    )
}

/// Generate an error for an unset configuration key.
pub fn config_key_not_found(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Config key not set: {key}\n\n\
         hint: Use 'gyt config' to list all values\n\
         hint: Use 'gyt config {key} <value>' to set it"
    )
}

/// Attach hints to library errors that have an obvious fix.
///
/// Errors without a known remedy pass through unchanged.
pub fn explain(error: Error) -> anyhow::Error {
    match error {
        Error::NotARepository { path } => not_a_repository(&path),
        Error::NothingStaged => nothing_staged(),
        Error::NoRemote => no_remote(),
        Error::ConfigKeyNotFound { key } => config_key_not_found(&key),
        Error::InvalidConfigKey { key, reason } => anyhow::anyhow!(
            "Invalid config key '{key}': {reason}\n\n\
             hint: Keys are dot-separated names such as user.name or remote.url"
        ),
        other => anyhow::Error::new(other),
    }
}
