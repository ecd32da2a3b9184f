//! End-to-end tests for the `config` command.

mod common;
use common::prelude::*;

#[test]
fn test_config_lists_defaults() {
    let fixture = TestFixture::new().initialized();

    fixture
        .command()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"user\""))
        .stdout(predicate::str::contains("\"remote\""))
        .stdout(predicate::str::contains("\"url\": \"\""));
}

#[test]
fn test_config_set_and_get() {
    let fixture = TestFixture::new().initialized();

    fixture
        .command()
        .args(["config", "user.name", "Demo User"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set user.name = Demo User"));

    fixture
        .command()
        .args(["config", "user.name"])
        .assert()
        .success()
        .stdout("user.name = Demo User\n");

    let config = fixture.read_json("config.json");
    assert_eq!(config["user"]["name"], "Demo User");
    assert_eq!(config["user"]["email"], "");
}

#[test]
fn test_config_set_new_section() {
    let fixture = TestFixture::new().initialized();

    fixture
        .command()
        .args(["config", "goals.weekly", "5"])
        .assert()
        .success();

    let config = fixture.read_json("config.json");
    assert_eq!(config["goals"]["weekly"], "5");
}

#[test]
fn test_config_get_section() {
    let fixture = TestFixture::new().initialized();

    fixture
        .command()
        .args(["config", "user"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("user = {"))
        .stdout(predicate::str::contains("\"email\": \"\""));
}

#[test]
fn test_config_get_missing_key_fails() {
    let fixture = TestFixture::new().initialized();

    fixture
        .command()
        .args(["config", "core.editor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config key not set: core.editor"));
}

#[test]
fn test_config_invalid_key_fails() {
    let fixture = TestFixture::new().initialized();

    fixture
        .command()
        .args(["config", "user..name", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config key 'user..name'"));

    let config = fixture.read_json("config.json");
    assert_eq!(config["user"]["name"], "");
}

#[test]
fn test_config_outside_repository_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "user.name", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a gyt repository"));
}
