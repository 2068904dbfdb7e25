//! CLI integration tests for the calcdeck binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn test_cmd() -> Command {
    let mut cmd = Command::cargo_bin("calcdeck").unwrap();
    cmd.env_remove("CALCDECK_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn contains_text(text: &str) -> predicates::str::ContainsPredicate {
    predicate::str::contains(text)
}

#[test]
fn test_help_command() {
    test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains_text("Usage:"))
        .stdout(contains_text("stock-average"))
        .stdout(contains_text("future-value"))
        .stdout(contains_text("eval"));
}

#[test]
fn test_verbose_logs_cli_events() {
    test_cmd()
        .args(["-v", "emi"])
        .assert()
        .success()
        .stderr(contains_text("Verbose logging enabled"))
        .stderr(contains_text("running calculator"));
}

#[test]
fn test_default_logging_shows_cli_info() {
    test_cmd()
        .arg("emi")
        .assert()
        .success()
        .stderr(contains_text("running calculator"))
        .stderr(contains_text("Verbose logging enabled").not());
}

#[test]
fn test_list_command() {
    test_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains_text("stock-split"))
        .stdout(contains_text("Body mass index"));
}

#[test]
fn test_list_json() {
    let output = test_cmd().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let catalog: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(catalog.as_array().unwrap().len(), 8);
    assert_eq!(catalog[0]["slug"], "stock-average");
}

#[test]
fn test_emi_defaults() {
    test_cmd()
        .arg("emi")
        .assert()
        .success()
        .stdout(contains_text("EMI RESULTS"))
        .stdout(contains_text("₹21,494"))
        .stdout(contains_text("₹2,89,634"));
}

#[test]
fn test_emi_rejects_zero_rate() {
    test_cmd()
        .args(["emi", "--rate", "0"])
        .assert()
        .failure()
        .stderr(contains_text("annual_rate_percent"));
}

#[test]
fn test_stock_split() {
    test_cmd()
        .args(["stock-split", "--price", "100", "--ratio", "1:2", "--shares", "100"])
        .assert()
        .success()
        .stdout(contains_text("₹66.67"))
        .stdout(contains_text("Total shares:       150"));
}

#[test]
fn test_stock_split_bad_ratio() {
    test_cmd()
        .args(["stock-split", "--ratio", "two"])
        .assert()
        .failure()
        .stderr(contains_text("split_ratio"));
}

#[test]
fn test_stock_average() {
    test_cmd()
        .args(["stock-average", "--entry", "10@100", "--entry", "10@200"])
        .assert()
        .success()
        .stdout(contains_text("₹150.00"))
        .stdout(contains_text("₹3,000"));
}

#[test]
fn test_non_numeric_flag_counts_as_zero() {
    let output = test_cmd()
        .args(["--json", "future-value", "--initial", "abc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["future_value"], 0.0);
}

#[test]
fn test_sip_step_up_json() {
    let output = test_cmd()
        .args(["sip", "--mode", "step-up", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["calculator"], "sip");
    assert_eq!(result["total_investment"], 956_245.0);
    assert_eq!(result["future_value"], 1_687_163.0);
}

#[test]
fn test_trip_with_expense() {
    test_cmd()
        .args(["trip", "--expense", "Food=1000"])
        .assert()
        .success()
        .stdout(contains_text("₹1,133"));
}

#[test]
fn test_age_with_end_date() {
    test_cmd()
        .args(["age", "--birth", "1990-01-15", "--end", "2024-03-10"])
        .assert()
        .success()
        .stdout(contains_text("34 years, 1 months, 24 days"));
}

#[test]
fn test_age_defaults_to_today() {
    test_cmd().args(["age", "--birth", "1990-01-01"]).assert().success();
}

#[test]
fn test_age_birth_after_end() {
    test_cmd()
        .args(["age", "--birth", "2030-01-01", "--end", "2020-01-01"])
        .assert()
        .failure()
        .stderr(contains_text("birth_date"));
}

#[test]
fn test_age_error_as_json() {
    let output = test_cmd()
        .args(["--json", "age", "--birth", "2030-01-01", "--end", "2020-01-01"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let error: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(error["type"], "InvalidInput");
    assert_eq!(error["details"]["field"], "birth_date");
}

#[test]
fn test_bmi() {
    test_cmd()
        .args(["bmi", "--height", "173", "--weight", "75"])
        .assert()
        .success()
        .stdout(contains_text("25.06"))
        .stdout(contains_text("Overweight"))
        .stdout(contains_text("Time to run!"));
}

#[test]
fn test_config_file_changes_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"currency": {{"symbol": "Rs ", "fraction_digits": 2}}, "defaults": {{"emi": {{"years": 5.0}}}}}}"#
    )
    .unwrap();

    test_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("emi")
        .assert()
        .success()
        .stdout(contains_text("Rs 21,493.90"));
}

#[test]
fn test_invalid_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"currency": {{"fraction_digits": 12}}}}"#).unwrap();

    test_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(contains_text("fraction_digits"));
}

#[test]
fn test_eval_document() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"calculator": "future-value", "initial_amount": 100.0, "annual_rate_percent": 10.0, "years": 5.0}}"#
    )
    .unwrap();

    test_cmd()
        .arg("eval")
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains_text("₹161.05"));
}

#[test]
fn test_eval_missing_file() {
    test_cmd()
        .args(["eval", "--input", "/nonexistent/calc.json"])
        .assert()
        .failure()
        .stderr(contains_text("Failed to read"));
}
