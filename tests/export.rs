#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use nightrelcalc::io::{export_result_json, export_scenarios_csv};
use nightrelcalc::{compute, ScenarioRequest};
use std::fs;
use tempfile::tempdir;

#[test]
fn csv_has_one_row_per_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenarios.csv");
    let res = compute(&ScenarioRequest::new("20:00", 5.0).combine(2.0).normal_day("09:00", "17:00"))
        .unwrap();
    export_scenarios_csv(&path, &res).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[0], "title");
    assert_eq!(&headers[10], "next_end");

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    let split = &rows[2];
    assert_eq!(&split[0], "Full day + 2.00h + 3.00h");
    assert_eq!(&split[1], "14:00");
    assert_eq!(&split[6], "01:00 (+1d)");
    assert_eq!(&split[8], "3h00m");
}

#[test]
fn json_export_is_machine_readable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("result.json");
    let res = compute(&ScenarioRequest::new("18:30", 4.0)).unwrap();
    export_result_json(&path, &res).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value["full_day_minutes"], 510);
    assert_eq!(value["release"]["start"], "18:30");
    assert_eq!(value["release"]["end"], "22:30");
    assert_eq!(value["next_day"]["start"], "09:30 (+1d)");
    let scenarios = value["scenarios"].as_array().unwrap();
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0]["kind"], "release_included");
    assert_eq!(scenarios[1]["overtime_minutes"], 240);
}

#[test]
fn json_clock_values_carry_day_offset() {
    let res = compute(&ScenarioRequest::new("02:00", 2.0)).unwrap();
    let value = serde_json::to_value(&res).unwrap();
    let work = &value["scenarios"][0]["work"];
    assert_eq!(work["start"], "19:30 (-1d)");
    assert_eq!(work["end"], "04:00");
    assert_eq!(value["normal_day"]["start"], "09:00");
}
