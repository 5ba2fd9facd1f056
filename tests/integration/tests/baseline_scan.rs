//! Integration tests for the full scanning pipeline.
//!
//! Runs the `baselint` binary against fixture projects and checks the
//! engine's contract end to end: boundary rules, ordering, tie-breaks, and
//! exit codes.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn scans_whole_project_directory() {
    let project = fixtures_dir().join("project");

    Command::cargo_bin("baselint").unwrap()
        .arg("check")
        .arg(&project)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("api-fetch"))
        .stdout(predicate::str::contains("api-structured-clone"))
        .stdout(predicate::str::contains("api-clipboard"))
        .stdout(predicate::str::contains("css-gap"))
        .stdout(predicate::str::contains("css-aspect-ratio"))
        .stdout(predicate::str::contains("css-container-type"));
}

#[test]
fn word_boundary_does_not_flag_substrings() {
    // app.ts calls refetchData(); `fetch` inside it must not match.
    let file = fixtures_dir().join("project/src/app.ts");

    let output = Command::cargo_bin("baselint").unwrap()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(&file)
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fetch_count = parsed[0]["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["feature_id"] == "api-fetch")
        .count();

    assert_eq!(fetch_count, 1);
}

#[test]
fn css_property_without_colon_is_not_flagged() {
    // main.css mentions "gap" in a comment with no colon; only the real
    // declaration counts.
    let file = fixtures_dir().join("project/styles/main.css");

    let output = Command::cargo_bin("baselint").unwrap()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(&file)
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let gap_count = parsed[0]["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["feature_id"] == "css-gap")
        .count();

    assert_eq!(gap_count, 1);
}

#[test]
fn diagnostics_are_ordered_by_offset() {
    let file = fixtures_dir().join("project/src/app.ts");

    let output = Command::cargo_bin("baselint").unwrap()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(&file)
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let starts: Vec<u64> = parsed[0]["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["span"]["start"].as_u64().unwrap())
        .collect();

    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
}

#[test]
fn overlapping_features_keep_catalog_order() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::copy(
        fixtures_dir().join("overlap_catalog.json"),
        temp.path().join("catalog.json"),
    )
    .unwrap();
    std::fs::write(
        temp.path().join(".baselint.json"),
        r#"{ "catalog": "catalog.json" }"#,
    )
    .unwrap();
    let file = temp.path().join("page.css");
    std::fs::write(&file, "display: flex;").unwrap();

    let output = Command::cargo_bin("baselint").unwrap()
        .current_dir(temp.path())
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(&file)
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diagnostics = parsed[0]["diagnostics"].as_array().unwrap();

    // Both features match the same token; catalog order decides the order.
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0]["feature_id"], "flex-a");
    assert_eq!(diagnostics[1]["feature_id"], "flex-b");
    assert_eq!(diagnostics[0]["span"], diagnostics[1]["span"]);
}

#[test]
fn repeated_runs_are_deterministic() {
    let project = fixtures_dir().join("project");

    let run = || {
        Command::cargo_bin("baselint").unwrap()
            .arg("check")
            .arg("--format")
            .arg("json")
            .arg(&project)
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn empty_catalog_yields_no_findings() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("catalog.json"), r#"{ "features": [] }"#).unwrap();
    std::fs::write(
        temp.path().join(".baselint.json"),
        r#"{ "catalog": "catalog.json" }"#,
    )
    .unwrap();
    let file = temp.path().join("app.js");
    std::fs::write(&file, "fetch(); gap: 1px;").unwrap();

    Command::cargo_bin("baselint").unwrap()
        .current_dir(temp.path())
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("found 0 feature uses"));
}

#[test]
fn invalid_catalog_is_rejected_at_startup() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join("catalog.json"),
        r#"{ "features": [ { "id": "bad", "category": "api", "matchName": "", "safe": true } ] }"#,
    )
    .unwrap();
    std::fs::write(
        temp.path().join(".baselint.json"),
        r#"{ "catalog": "catalog.json" }"#,
    )
    .unwrap();
    let file = temp.path().join("app.js");
    std::fs::write(&file, "anything").unwrap();

    Command::cargo_bin("baselint").unwrap()
        .current_dir(temp.path())
        .arg("check")
        .arg(&file)
        .assert()
        .code(2);
}
