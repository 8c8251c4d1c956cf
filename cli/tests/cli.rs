//! End-to-end tests for the balti binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from any config on the host machine
fn balti(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("balti").unwrap();
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("BALTI_DICTIONARY")
        .env_remove("BALTI_FUZZY_THRESHOLD")
        .env_remove("BALTI_CACHE_TTL_SECS");
    cmd
}

#[test]
fn test_search_sample_dictionary() {
    let home = TempDir::new().unwrap();

    balti(&home)
        .args(["search", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chu - water"));
}

#[test]
fn test_fuzzy_search_from_file() {
    let home = TempDir::new().unwrap();
    let dictionary = home.path().join("words.json");
    fs::write(
        &dictionary,
        r#"[
            {"word": "chu", "translation": "water"},
            {"word": "ri", "translation": "mountain"}
        ]"#,
    )
    .unwrap();

    balti(&home)
        .arg("--dictionary")
        .arg(&dictionary)
        .args(["search", "chu", "--fuzzy", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word\": \"chu\""))
        .stdout(predicate::str::contains("mountain").not());
}

#[test]
fn test_search_with_category_filter() {
    let home = TempDir::new().unwrap();

    balti(&home)
        .args(["search", "", "--category", "numbers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 match(es)"));
}

#[test]
fn test_config_file_in_working_dir() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("balti.json"), r#"{"result_limit": 1}"#).unwrap();

    balti(&home)
        .args(["search", "", "--category", "numbers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 match(es)"));
}

#[test]
fn test_invalid_threshold_fails() {
    let home = TempDir::new().unwrap();

    balti(&home)
        .args(["--threshold", "3", "search", "chu"])
        .assert()
        .failure();
}

#[test]
fn test_suggest_substring() {
    let home = TempDir::new().unwrap();

    balti(&home)
        .args(["suggest", "mom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("momo"));
}

#[test]
fn test_interactive_serves_repeat_from_cache() {
    let home = TempDir::new().unwrap();

    balti(&home)
        .write_stdin("~chu\n~chu\n:stats\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(fresh)"))
        .stdout(predicate::str::contains("(cached)"))
        .stdout(predicate::str::contains("Cached queries: 1"));
}
