//! Default values for gyt.
//!
//! This module provides centralized names and default values used across
//! commands, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Name of the repository directory created by `gyt init`.
pub const GYT_DIR_NAME: &str = ".gyt";

/// Staged milestones awaiting a commit.
pub const STAGING_FILENAME: &str = "staging.json";

/// Commit history, oldest first.
pub const COMMITS_FILENAME: &str = "commits.json";

/// Repository configuration.
pub const CONFIG_FILENAME: &str = "config.json";

/// Milestone message used by `gyt add --all` and `gyt add .`.
pub const DEFAULT_MILESTONE_MESSAGE: &str = "Daily progress";

/// Number of commits shown by `gyt log` when `--limit` is not given.
pub const DEFAULT_LOG_LIMIT: usize = 10;

/// Window used by `gyt stats` when `--days` is not given.
pub const DEFAULT_STATS_DAYS: u32 = 30;

/// Length of the abbreviated commit hash.
pub const COMMIT_HASH_LEN: usize = 8;

/// Returns the default repository root.
///
/// This is the current working directory, falling back to `.` if it cannot
/// be determined. It can be overridden by the `--repo` CLI flag or the
/// `GYT_DIR` environment variable.
pub fn default_repo_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
