//! Integration tests for the rumo CLI
//!
//! These tests run the rumo binary and verify output shapes and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

/// Get a Command for rumo
fn rumo() -> Command {
    cargo_bin_cmd!("rumo")
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    rumo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rumo"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("capitals"));
}

#[test]
fn test_version_flag() {
    rumo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rumo"));
}

#[test]
fn test_no_command_prints_banner() {
    rumo()
        .assert()
        .success()
        .stdout(predicate::str::contains("rumo"))
        .stdout(predicate::str::contains("--help"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    rumo()
        .args(["--format", "records", "capitals"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_strategy_exit_code_2() {
    rumo()
        .args(["route", "São Paulo", "Curitiba", "--strategy", "dijkstra"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_capital_exit_code_3() {
    rumo()
        .args(["route", "Atlantis", "Curitiba"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown capital"));
}

#[test]
fn test_usage_error_json_envelope() {
    rumo()
        .args(["--format", "json", "route", "São Paulo"]) // missing destination
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_data_error_json_envelope() {
    rumo()
        .args(["--format", "json", "route", "Atlantis", "Curitiba"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unknown_capital\""));
}

// ============================================================================
// capitals / borders
// ============================================================================

#[test]
fn test_capitals_lists_all_27() {
    let output = rumo().arg("capitals").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 27);
    assert!(stdout.contains("Brasília (DF, Distrito Federal)"));
    assert!(stdout.contains("São Paulo (SP, São Paulo)"));
}

#[test]
fn test_capitals_json() {
    let output = rumo()
        .args(["--format", "json", "capitals"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 27);
    assert_eq!(rows[0]["code"], "AC");
    assert_eq!(rows[0]["capital"], "Rio Branco");
}

#[test]
fn test_borders_of_brasilia() {
    rumo()
        .args(["borders", "Brasília"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goiânia (210 km)"))
        .stdout(predicate::str::contains("Belo Horizonte (740 km)"));
}

#[test]
fn test_borders_unknown_capital() {
    rumo().args(["borders", "Gotham"]).assert().code(3);
}

// ============================================================================
// route
// ============================================================================

#[test]
fn test_route_direct_neighbours() {
    rumo()
        .args(["route", "São Paulo", "Rio de Janeiro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("São Paulo -> Rio de Janeiro"))
        .stdout(predicate::str::contains("cost: 430"));
}

#[test]
fn test_route_same_capital_costs_zero() {
    rumo()
        .args(["route", "São Paulo", "São Paulo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("São Paulo"))
        .stdout(predicate::str::contains("cost: 0"));
}

#[test]
fn test_route_json_report() {
    let output = rumo()
        .args(["--format", "json", "route", "Manaus", "Porto Alegre"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["found"], true);
    assert_eq!(report["strategy"], "breadth-first");
    assert_eq!(report["route"][0], "Manaus");
    assert!(report["cost"].as_u64().unwrap() > 0);
}

#[test]
fn test_route_strategy_aliases() {
    rumo()
        .args(["route", "Manaus", "Porto Alegre", "--strategy", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost:"));
}

#[test]
fn test_route_best_first_with_region_distance() {
    rumo()
        .args([
            "route",
            "Manaus",
            "Porto Alegre",
            "--strategy",
            "best-first",
            "--heuristic",
            "region-distance",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost:"));
}

// ============================================================================
// compare
// ============================================================================

#[test]
fn test_compare_runs_all_strategies() {
    rumo()
        .args(["compare", "São Paulo", "Salvador"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== breadth-first =="))
        .stdout(predicate::str::contains("== depth-first =="))
        .stdout(predicate::str::contains("== best-first =="));
}

#[test]
fn test_compare_json_is_array_of_three() {
    let output = rumo()
        .args(["--format", "json", "compare", "São Paulo", "Salvador"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reports.as_array().unwrap().len(), 3);
}
