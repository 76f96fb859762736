//! Tests for configuration validation

use lockrun::config::EngineConfig;

#[test]
fn test_default_config_valid() {
    let cfg = EngineConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.max_finished_tasks, None);
}

#[test]
fn test_config_invalid_zero_retention() {
    let cfg = EngineConfig {
        max_finished_tasks: Some(0),
        event_capacity: 1024,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_invalid_zero_event_capacity() {
    let cfg = EngineConfig {
        max_finished_tasks: None,
        event_capacity: 0,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "max_finished_tasks": 500,
        "event_capacity": 64
    }"#;

    let cfg = EngineConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.max_finished_tasks, Some(500));
    assert_eq!(cfg.event_capacity, 64);
}

#[test]
fn test_config_from_json_unbounded_retention() {
    let json = r#"{ "event_capacity": 64 }"#;
    let cfg = EngineConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.max_finished_tasks, None);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(EngineConfig::from_json_str("not json").is_err());
    assert!(EngineConfig::from_json_str(r#"{ "event_capacity": 0 }"#).is_err());
}
