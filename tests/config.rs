use kotlinbridge::defaults::{self, DisplayConfig, KotlinBridgeConfig};
use kotlinbridge::render::Report;
use kotlinbridge::ErrorCode;
use serde_json::json;
use std::fs;

#[test]
fn set_then_save_persists_the_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kotlinbridge.json");

    let config = defaults::set_pointer(
        &defaults::builtin_defaults(),
        "/display/truncation_marker",
        json!("~"),
    )
    .unwrap();
    defaults::save_config_to(&config, &path).unwrap();

    let loaded = defaults::load_config_from(&path).unwrap();
    assert_eq!(loaded.display.truncation_marker, "~");
    assert_eq!(loaded.display.max_result_width, 60);

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["display"]["truncation_marker"], "~");
}

#[test]
fn unknown_top_level_field_is_rejected() {
    let err = defaults::set_pointer(&KotlinBridgeConfig::default(), "/theme", json!("dark")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    assert_eq!(err.details["field"], "pointer");
}

#[test]
fn missing_display_section_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kotlinbridge.json");
    fs::write(&path, r#"{"display": {"result_arrow": "=>"}}"#).unwrap();

    let display = defaults::load_config_from(&path).unwrap().display;
    assert_eq!(display.result_arrow, "=>");
    assert_eq!(display, DisplayConfig { result_arrow: "=>".to_string(), ..DisplayConfig::default() });
}

#[test]
fn reset_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kotlinbridge.json");
    defaults::save_config_to(&defaults::builtin_defaults(), &path).unwrap();

    assert!(defaults::reset_config_at(&path).unwrap());
    assert!(!path.exists());
    assert!(defaults::load_config_from(&path).is_err());
}

#[test]
fn report_follows_display_settings() {
    let display = DisplayConfig {
        max_result_width: 8,
        truncation_marker: "~".to_string(),
        result_arrow: "=>".to_string(),
        rule_max_width: 3,
    };
    let mut report = Report::new(display);
    report.section("Numbers");
    report.log("digits", &"0123456789");

    assert_eq!(report.text(), "\nNumbers\n---\n\ndigits\n  => 0123456~\n\n");
    assert_eq!(report.entries()[0].result, "0123456~");
}

#[test]
fn update_load_keeps_corrupt_file_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kotlinbridge.json");
    fs::write(&path, "{\"display\": ").unwrap();

    let err = defaults::load_config_for_update_at(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationInvalidJson);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"display\": ");
}
