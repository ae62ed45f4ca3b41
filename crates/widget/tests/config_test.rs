use std::io::Write;

use pretty_assertions::assert_eq;
use slotbook_core::models::{
    config::BookingConfig,
    slot::{Phase, SlotTime},
};
use slotbook_widget::config::load_config_from;

#[test]
fn test_load_config_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"{{
            "date": "2018-07-17",
            "startingHourLimit": 9,
            "startingPhase": "am",
            "endingHourLimit": 5,
            "endingPhase": "pm",
            "selectedTimeRanges": [{{ "hour": 9, "phase": "am" }}],
            "hourlyRate": 100,
            "currency": "AED"
        }}"#
    )
    .expect("Failed to write temp file");

    let config = load_config_from(file.path()).expect("Failed to load config");

    assert_eq!(config.currency, "AED");
    assert_eq!(config.hourly_rate, 100.0);
    assert_eq!(config.reserved, vec![SlotTime::new(9, Phase::Am)]);
    assert!(config.visible_window().is_some());
}

#[test]
fn test_load_config_missing_file() {
    let error = load_config_from("/definitely/not/here.json").unwrap_err();

    assert!(error.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_config_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{{ not json").expect("Failed to write temp file");

    let error = load_config_from(file.path()).unwrap_err();

    assert!(error.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_demo_preset_passes_validation() {
    let config = BookingConfig::demo_preset();

    assert!(config.validate().is_ok());
}
