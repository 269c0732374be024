use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_categories_default_order() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .arg("categories")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(
        ids,
        vec![
            "recent", "people", "nature", "foods", "activity", "places", "objects", "symbols",
            "flags"
        ]
    );
    assert!(stdout.contains("people\tSmileys & People\t24"));
}

#[test]
fn test_categories_include_orders_and_hides_recent() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .args(["--include", "flags,people", "categories"])
        .assert()
        .success()
        .stdout("flags\tFlags\t12\npeople\tSmileys & People\t24\n");
}

#[test]
fn test_categories_unknown_include_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .args(["--include", "bogus", "categories"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no categories left to show"));
}

#[test]
fn test_categories_use_translated_labels() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[i18n.categories]\nflags = \"Banderas\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("emart")
        .env("EMART_HOME", dir.path())
        .args(["--no-recent", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flags\tBanderas\t12"))
        .stdout(predicate::str::contains("recent").not());
}
