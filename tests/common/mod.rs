//! Shared test utilities for CLI E2E tests.
//!
//! This module provides a fixture, helper functions, and snippets to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().initialized();
//!     fixture.command().arg("status").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::fixtures;
    pub use super::TestFixture;
}

/// Hand-written repository files for tests that need history in the past.
#[allow(dead_code)]
pub mod fixtures {
    /// Two commits: one in 2020 with three milestones, one hashless legacy
    /// entry with a naive timestamp.
    pub const OLD_COMMITS: &str = r#"[
  {
    "message": "Ancient history",
    "milestones": [
      {"message": "one", "timestamp": "2020-01-01T10:00:00+00:00", "tags": []},
      {"message": "two", "timestamp": "2020-01-01T10:00:00+00:00", "tags": []},
      {"message": "three", "timestamp": "2020-01-01T10:00:00+00:00", "tags": []}
    ],
    "timestamp": "2020-01-01T10:00:00+00:00",
    "commit_hash": "0badc0de"
  },
  {
    "message": "Legacy entry",
    "milestones": [
      {"message": "imported", "timestamp": "2020-02-01T09:30:00.123456"}
    ],
    "timestamp": "2020-02-01T09:30:00.123456",
    "commit_hash": null
  }
]"#;
}

/// A test fixture that provides a temporary directory to run `gyt` in.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Run `gyt init` in the fixture directory.
    pub fn initialized(self) -> Self {
        self.command().arg("init").assert().success();
        self
    }

    /// Stage a milestone with `gyt add`.
    #[allow(dead_code)]
    pub fn with_milestone(self, message: &str) -> Self {
        self.command().args(["add", message]).assert().success();
        self
    }

    /// Overwrite a file inside `.gyt`.
    #[allow(dead_code)]
    pub fn with_gyt_file(self, name: &str, content: &str) -> Self {
        self.temp_dir
            .child(".gyt")
            .child(name)
            .write_str(content)
            .expect("Failed to write repository file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file inside `.gyt` as JSON.
    #[allow(dead_code)]
    pub fn read_json(&self, name: &str) -> serde_json::Value {
        let content = std::fs::read_to_string(self.path().join(".gyt").join(name))
            .expect("Failed to read repository file");
        serde_json::from_str(&content).expect("Repository file is not valid JSON")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory with a
    /// predictable environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gyt");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("GYT_DIR")
            .env_remove("RUST_LOG")
            .env_remove("RUST_BACKTRACE")
            .env_remove("RUST_LIB_BACKTRACE");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_old_commits_fixture_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(fixtures::OLD_COMMITS).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
