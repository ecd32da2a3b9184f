//! Snapshot tests for CLI output using insta.
//!
//! These tests capture stable user-facing output as snapshots, making it
//! easy to review changes to it.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta test --accept
//! ```

mod common;
use common::prelude::*;

/// Strip the temp-dir path and trailing whitespace so snapshots are stable.
fn normalize_output(output: &[u8]) -> String {
    let text = String::from_utf8_lossy(output);
    let re = regex::Regex::new(r"Not a gyt repository: .*").unwrap();
    let replaced = re.replace_all(&text, "Not a gyt repository: [TEMP]");
    replaced
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[test]
fn test_config_default_snapshot() {
    let fixture = TestFixture::new().initialized();
    let output = fixture
        .command()
        .arg("config")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let normalized = normalize_output(&output.stdout);
    insta::assert_snapshot!("config_default", normalized);
}

#[test]
fn test_status_empty_snapshot() {
    let fixture = TestFixture::new().initialized();
    let output = fixture
        .command()
        .arg("status")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let normalized = normalize_output(&output.stdout);
    insta::assert_snapshot!("status_empty", normalized);
}

#[test]
fn test_not_a_repository_error_snapshot() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .arg("status")
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));

    let normalized = normalize_output(&output.stderr);
    insta::assert_snapshot!("not_a_repository_error", normalized);
}
