//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `gyt`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   [`Context`] and performs the command's logic by calling into the `gyt`
//!   library.

use std::path::PathBuf;

use anyhow::Result;
use gyt::output::OutputConfig;
use gyt::repository::Repository;
use gyt::suggestions;

pub mod add;
pub mod commit;
pub mod completions;
pub mod config;
pub mod init;
pub mod log;
pub mod push;
pub mod stats;
pub mod status;

/// State resolved from global flags, shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory that holds (or will hold) `.gyt`.
    pub repo_root: PathBuf,
    pub output: OutputConfig,
}

impl Context {
    /// Open the repository, failing with a hint when it is not initialized.
    pub fn open_repo(&self) -> Result<Repository> {
        Repository::open(&self.repo_root).map_err(suggestions::explain)
    }
}
