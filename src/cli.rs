//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gyt::output::OutputConfig;

use crate::commands::{self, Context};

/// gyt - Track your milestones like commits
#[derive(Parser, Debug)]
#[command(name = "gyt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        global = true,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,

    /// Repository root directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR", env = "GYT_DIR")]
    repo: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new gyt repository in the current directory
    Init(commands::init::InitArgs),

    /// Get or set configuration values
    Config(commands::config::ConfigArgs),

    /// Add a milestone to the staging area
    Add(commands::add::AddArgs),

    /// Show the status of the repository
    Status(commands::status::StatusArgs),

    /// Commit staged milestones
    Commit(commands::commit::CommitArgs),

    /// Show commit history
    Log(commands::log::LogArgs),

    /// Show milestone statistics
    Stats(commands::stats::StatsArgs),

    /// Push commits to the configured remote
    Push(commands::push::PushArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        output.apply();

        let repo_root = self
            .repo
            .unwrap_or_else(gyt::defaults::default_repo_root);
        log::debug!("Using repository root {}", repo_root.display());

        let ctx = Context { repo_root, output };

        match self.command {
            Commands::Init(args) => commands::init::execute(args, &ctx),
            Commands::Config(args) => commands::config::execute(args, &ctx),
            Commands::Add(args) => commands::add::execute(args, &ctx),
            Commands::Status(args) => commands::status::execute(args, &ctx),
            Commands::Commit(args) => commands::commit::execute(args, &ctx),
            Commands::Log(args) => commands::log::execute(args, &ctx),
            Commands::Stats(args) => commands::stats::execute(args, &ctx),
            Commands::Push(args) => commands::push::execute(args, &ctx),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr at `level`, letting `RUST_LOG` override it.
fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level);
    builder.parse_default_env();
    builder.format_timestamp(None);
    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}
