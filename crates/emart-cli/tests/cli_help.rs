use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("emart")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--no-recent"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("emart")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_picker_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
