use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_search_prints_best_match_first() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .args(["search", "joy"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.lines().next().unwrap();
    assert_eq!(first, "😂\t:joy:\tFace with Tears of Joy");
}

#[test]
fn test_search_limit() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .args(["search", "face", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
}

#[test]
fn test_search_without_match() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .args(["search", "qqzzxx"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No Emoji Found"));
}

#[test]
fn test_search_respects_exclude() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .args(["--exclude", "people", "search", "joy"])
        .assert()
        .success()
        .stdout(predicate::str::contains(":joy:").not());
}

#[test]
fn test_search_uses_custom_emojis_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[[custom]]
name = "Octocat"
short_names = ["octocat"]
text = ":octocat:"
"#,
    )
    .unwrap();

    cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .args(["search", "octocat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Octocat"));
}
