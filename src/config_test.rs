#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

#[test]
fn defaults_match_stock_page() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.timings.menu_focus_delay_ms, 100);
    assert_eq!(cfg.timings.scroll_debounce_ms, 16);
    assert_eq!(cfg.timings.notification_dwell_ms, 3000);
    assert_eq!(cfg.timings.notification_exit_ms, 300);
    assert_eq!(cfg.geometry.scrolled_threshold_px, 50.0);
    assert_eq!(cfg.geometry.section_allowance_px, 150.0);
    assert_eq!(cfg.geometry.scroll_gutter_px, 20.0);
    assert_eq!(cfg.visibility.skills_threshold, 0.3);
    assert_eq!(cfg.visibility.reveal_threshold, 0.15);
    assert_eq!(cfg.visibility.section_root_margin, "-20% 0px -20% 0px");
    assert_eq!(cfg.active_section, ActiveSectionSource::Observer);
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.preload_stylesheets.len(), 2);
    assert_eq!(cfg.level(), log::Level::Info);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let raw = json!({
        "timings": { "notification_dwell_ms": 5000 },
        "active_section": "both",
    })
    .to_string();
    let cfg = PageConfig::from_json(&raw).unwrap();
    assert_eq!(cfg.timings.notification_dwell_ms, 5000);
    assert_eq!(cfg.timings.notification_exit_ms, 300);
    assert_eq!(cfg.active_section, ActiveSectionSource::Both);
    assert_eq!(cfg.geometry, Geometry::default());
}

#[test]
fn resume_artifact_can_be_replaced() {
    let raw = json!({ "resume": { "file_name": "cv.txt" } }).to_string();
    let cfg = PageConfig::from_json(&raw).unwrap();
    assert_eq!(cfg.resume.file_name, "cv.txt");
    assert_eq!(cfg.resume.contents, RESUME_CONTENTS);
}

#[test]
fn invalid_json_is_a_config_error() {
    let err = PageConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
    assert!(err.to_string().starts_with("invalid page config"));
}

#[test]
fn from_json_or_default_tolerates_garbage() {
    assert_eq!(PageConfig::from_json_or_default(None), PageConfig::default());
    assert_eq!(PageConfig::from_json_or_default(Some("   ")), PageConfig::default());
    assert_eq!(PageConfig::from_json_or_default(Some("[1, 2]")), PageConfig::default());
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let cfg = PageConfig { log_level: "loud".into(), ..PageConfig::default() };
    assert_eq!(cfg.level(), log::Level::Info);
    let cfg = PageConfig { log_level: "debug".into(), ..PageConfig::default() };
    assert_eq!(cfg.level(), log::Level::Debug);
}

#[test]
fn active_section_source_flags() {
    assert!(ActiveSectionSource::Observer.uses_observer());
    assert!(!ActiveSectionSource::Observer.uses_polling());
    assert!(ActiveSectionSource::Polling.uses_polling());
    assert!(!ActiveSectionSource::Polling.uses_observer());
    assert!(ActiveSectionSource::Both.uses_observer());
    assert!(ActiveSectionSource::Both.uses_polling());
}
