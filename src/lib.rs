//! # gyt Library
//!
//! This library provides the core functionality behind the `gyt` command-line
//! tool: a git-shaped journal of *milestones*. Milestones are staged with
//! `gyt add`, grouped into hashed, timestamped commits with `gyt commit`, and
//! reviewed with `gyt log` and `gyt stats`.
//!
//! ## Quick Example
//!
//! ```
//! use gyt::models::Milestone;
//! use gyt::repository::Repository;
//!
//! let dir = std::env::temp_dir().join(format!("gyt-doc-{}", std::process::id()));
//! std::fs::create_dir_all(&dir).unwrap();
//!
//! let repo = Repository::new(&dir);
//! repo.init().unwrap();
//! repo.add_milestone(Milestone::new("Wrote the README").unwrap()).unwrap();
//!
//! let commit = repo.commit_staged("Docs day").unwrap();
//! assert_eq!(commit.milestones.len(), 1);
//! assert!(repo.staged_milestones().unwrap().is_empty());
//!
//! std::fs::remove_dir_all(&dir).unwrap();
//! ```
//!
//! ## Core Concepts
//!
//! - **Models (`models`)**: `Milestone` and `Commit`, and the commit hash.
//! - **Repository (`repository`)**: The `.gyt/` directory and its JSON files
//!   for staging, history, and configuration.
//! - **Configuration (`config`)**: Nested settings addressed by dotted keys
//!   such as `user.name` and `remote.url`.
//! - **Statistics (`stats`)**: Totals over a trailing window of days.
//! - **Output and errors (`output`, `error`, `suggestions`)**: Terminal
//!   styling decisions and user-facing error messages with hints.

pub mod config;
pub mod defaults;
pub mod error;
pub mod models;
pub mod output;
pub mod repository;
pub mod stats;
pub mod suggestions;
