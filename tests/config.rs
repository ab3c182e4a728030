#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use nightrelcalc::config::{hours_input, load_defaults_from_file};
use nightrelcalc::Defaults;
use std::fs;
use tempfile::tempdir;

#[test]
fn builtin_defaults_are_valid() {
    let d = Defaults::default();
    d.validate().unwrap();
    assert_eq!(d.normal_start, "09:00");
    assert_eq!(d.normal_end, "17:30");
    assert_eq!(hours_input(d.min_rest_hours), "11");
    assert_eq!(hours_input(d.max_overtime_hours), "4");
}

#[test]
fn partial_file_keeps_builtin_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("defaults.json");
    fs::write(&path, r#"{ "normal_start": "08:00", "min_rest_hours": 12.5 }"#).unwrap();

    let d = load_defaults_from_file(&path).unwrap();
    assert_eq!(d.normal_start, "08:00");
    assert_eq!(d.normal_end, "17:30");
    assert_eq!(d.min_rest_hours, 12.5);
    assert_eq!(d.max_overtime_hours, 4.0);
    assert_eq!(hours_input(d.min_rest_hours), "12.5");
}

#[test]
fn invalid_file_is_rejected() {
    let dir = tempdir().unwrap();

    let inverted = dir.path().join("inverted.json");
    fs::write(&inverted, r#"{ "normal_start": "18:00", "normal_end": "08:00" }"#).unwrap();
    assert!(load_defaults_from_file(&inverted).is_err());

    let negative = dir.path().join("negative.json");
    fs::write(&negative, r#"{ "max_overtime_hours": -1 }"#).unwrap();
    assert!(load_defaults_from_file(&negative).is_err());

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(load_defaults_from_file(&broken).is_err());

    assert!(load_defaults_from_file(dir.path().join("missing.json")).is_err());
}

#[test]
fn overtime_cap_is_checked_after_rounding() {
    // -0.001h s'arrondit à 0 minute, comme pour --max-overtime
    let d = Defaults {
        max_overtime_hours: -0.001,
        ..Defaults::default()
    };
    d.validate().unwrap();

    let d = Defaults {
        max_overtime_hours: -0.05,
        ..Defaults::default()
    };
    assert!(d.validate().is_err());
}
