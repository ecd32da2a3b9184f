//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `gyt` library. It uses the `thiserror` library to create an `Error` enum
//! that covers the anticipated failure modes, providing clear and
//! descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the library. Each variant carries the context needed to
//!   explain the failure to a user.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! The binary wraps these errors in `anyhow` and adds `hint:` lines through
//! the `suggestions` module where a fix is obvious.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for gyt operations
#[derive(Error, Debug)]
pub enum Error {
    /// The directory does not contain a `.gyt` repository.
    #[error("Not a gyt repository: {}", path.display())]
    NotARepository { path: PathBuf },

    /// `commit` was invoked with an empty staging area.
    #[error("No milestones staged")]
    NothingStaged,

    /// A milestone or commit message was empty after trimming.
    #[error("{what} message must not be empty")]
    EmptyMessage { what: &'static str },

    /// A configuration key did not have the `section.name` shape.
    #[error("Invalid config key '{key}': {reason}")]
    InvalidConfigKey { key: String, reason: String },

    /// A configuration key was looked up but never set.
    #[error("Config key not set: {key}")]
    ConfigKeyNotFound { key: String },

    /// `push` found no remote in the flags or configuration.
    #[error("No remote configured")]
    NoRemote,

    /// The remote URL is not usable for a push.
    #[error("Invalid remote URL '{url}': {message}")]
    InvalidRemote { url: String, message: String },

    /// A repository file held data of an unexpected shape.
    #[error("Corrupt repository file {}: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON (de)serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
