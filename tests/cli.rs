#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("nightrelcalc").unwrap();
    cmd.env_remove("NIGHTRELCALC_PORT");
    cmd
}

#[test]
fn prints_both_scenarios() {
    cli()
        .args(["--start", "18:30", "--length", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Release Window: 18:30 -> 22:30 (len 4h00m)"))
        .stdout(predicate::str::contains("Work Hours:                    14:00 -> 22:30"))
        .stdout(predicate::str::contains("Work Hours:                    10:00 -> 18:30"))
        .stdout(predicate::str::contains(
            "Next Day Hours:                09:30 (+1d) -> 18:00 (+1d)",
        ))
        .stdout(predicate::str::contains("h + ").not());
}

#[test]
fn combine_adds_third_scenario() {
    cli()
        .args([
            "--start", "20:00", "--length", "5", "--combine", "2", "--normal-end", "17:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full day + 2.00h + 3.00h"))
        .stdout(predicate::str::contains("Total Work:                    14:00 -> 01:00 (+1d)"));
}

#[test]
fn accepts_comma_decimals() {
    cli()
        .args(["--start", "18:30", "--length", "3,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(len 3h30m)"));
}

#[test]
fn inverted_normal_day_fails_with_status_1() {
    cli()
        .args([
            "--start", "18:30", "--length", "4", "--normal-start", "17:00", "--normal-end", "09:00",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "normal day must be within same day and end after start",
        ));
}

#[test]
fn missing_start_is_reported() {
    cli()
        .args(["--length", "4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--start is required"));
}

#[test]
fn json_output_parses() {
    let out = cli()
        .args(["--start", "18:30", "--length", "4", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["scenarios"].as_array().unwrap().len(), 2);
    assert_eq!(value["scenarios"][0]["work"]["start"], "14:00");
    assert_eq!(value["scenarios"][1]["total"]["end"], "22:30");
}

#[test]
fn config_file_sets_defaults_and_flags_override() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("defaults.json");
    fs::write(&config, r#"{ "normal_start": "08:00", "normal_end": "16:30" }"#).unwrap();
    let config = config.to_str().unwrap();

    cli()
        .args(["--start", "18:30", "--length", "4", "--config", config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Normal day: 08:00 -> 16:30 (len 8h30m)"));

    cli()
        .args([
            "--start", "18:30", "--length", "4", "--config", config, "--normal-end", "17:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Normal day: 08:00 -> 17:00 (len 9h00m)"));
}

#[test]
fn exports_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    cli()
        .args(["--start", "18:30", "--length", "4", "--out-csv"])
        .arg(&path)
        .assert()
        .success();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("title,work_start,work_end"));
    assert_eq!(content.lines().count(), 3);
}
