//! CLI integration tests.
//! Every command runs with `--delay-ms 0`; custom catalogs live in a temp directory.

use std::collections::HashSet;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn client() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quote_client").unwrap();
    cmd.args(["--delay-ms", "0"]);
    cmd
}

/// Write a catalog with `n` quotes (ids 1..=n) in `category`.
fn write_catalog(dir: &TempDir, category: &str, n: i64) -> PathBuf {
    let quotes: Vec<Value> = (1..=n)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "text": format!("{category} line {id}"),
                "author": format!("Author {id}"),
                "category": category,
            })
        })
        .collect();
    let mut root = serde_json::Map::new();
    root.insert(category.to_string(), Value::Array(quotes));
    let path = dir.path().join("quotes.json");
    std::fs::write(&path, Value::Object(root).to_string()).unwrap();
    path
}

fn ids_of(response: &Value) -> HashSet<i64> {
    response["quotes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

fn json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn categories_lists_builtin_catalog() {
    client()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("funny"))
        .stdout(predicate::str::contains("inspirational"))
        .stdout(predicate::str::contains("Wisdom: Timeless wisdom"));
}

#[test]
fn get_prints_requested_number_of_quotes() {
    let output = client()
        .args(["get", "--category", "wisdom", "--count", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn get_unknown_category_fails() {
    client()
        .args(["get", "--category", "nonexistent-category"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No quotes found for category: nonexistent-category",
        ));
}

#[test]
fn get_json_reports_tagged_failure() {
    let output = client()
        .args(["get", "--category", "nonexistent-category", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["success"], false);
    assert_eq!(
        response["error"],
        "No quotes found for category: nonexistent-category"
    );
    assert!(response.get("quotes").is_none());
}

#[test]
fn exclusions_are_respected_when_enough_remain() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, "funny", 5);
    let output = client()
        .arg("--catalog")
        .arg(&catalog)
        .args(["get", "--category", "funny", "--count", "3", "--exclude", "1,2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids_of(&response), HashSet::from([3, 4, 5]));
}

#[test]
fn too_many_exclusions_fall_back_to_whole_category() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, "funny", 5);
    let output = client()
        .arg("--catalog")
        .arg(&catalog)
        .args(["get", "--category", "funny", "--exclude", "1,2,3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids = ids_of(&response);
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| (1..=5).contains(id)));
}

#[test]
fn pad_fallback_keeps_non_excluded_quotes() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, "funny", 5);
    let output = client()
        .arg("--catalog")
        .arg(&catalog)
        .args(["--fallback", "pad"])
        .args(["get", "--category", "funny", "--exclude", "1,2,3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let ids = ids_of(&serde_json::from_slice(&output.stdout).unwrap());
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&4) && ids.contains(&5));
}

#[test]
fn zero_count_is_reported() {
    client()
        .args(["get", "--category", "life", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("count must be at least 1"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        client()
            .args(["--seed", "1234", "get", "--category", "success", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn watch_avoids_consecutive_repeats() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, "life", 6);
    let output = client()
        .arg("--catalog")
        .arg(&catalog)
        .args([
            "watch",
            "--category",
            "life",
            "--refreshes",
            "4",
            "--interval-ms",
            "0",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let responses = json_lines(&output.stdout);
    assert_eq!(responses.len(), 4);
    for pair in responses.windows(2) {
        let (prev, next) = (ids_of(&pair[0]), ids_of(&pair[1]));
        assert_eq!(next.len(), 3);
        assert!(prev.is_disjoint(&next), "{prev:?} repeated in {next:?}");
    }
}

#[test]
fn duplicate_ids_in_catalog_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dup.json");
    std::fs::write(
        &path,
        r#"{"funny": [
            {"id": 1, "text": "a", "author": "x", "category": "funny"},
            {"id": 1, "text": "b", "author": "y", "category": "funny"}
        ]}"#,
    )
    .unwrap();
    client()
        .arg("--catalog")
        .arg(&path)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate quote id 1"));
}

#[test]
fn missing_catalog_file_fails() {
    let dir = TempDir::new().unwrap();
    client()
        .arg("--catalog")
        .arg(dir.path().join("nope.json"))
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn negative_ids_can_be_loaded_and_excluded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signed.json");
    std::fs::write(
        &path,
        r#"{"life": [
            {"id": -2, "text": "a", "author": "x", "category": "life"},
            {"id": -1, "text": "b", "author": "y", "category": "life"},
            {"id": 0, "text": "c", "author": "z", "category": "life"}
        ]}"#,
    )
    .unwrap();
    let output = client()
        .arg("--catalog")
        .arg(&path)
        .args(["get", "--category", "life", "--count", "1", "--exclude=-2,-1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids_of(&response), HashSet::from([0]));
}

#[test]
fn unknown_category_with_zero_count_reports_missing_category() {
    client()
        .args(["get", "--category", "nonexistent-category", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No quotes found for category: nonexistent-category",
        ));
}
