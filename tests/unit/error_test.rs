//! Tests for error types

use lockrun::core::EngineError;

#[test]
fn test_conflict_error() {
    let err = EngineError::Conflict("repo:foo".to_string());
    assert_eq!(format!("{}", err), "resource conflict: repo:foo");
}

#[test]
fn test_conflict_helper_joins_keys() {
    let err = EngineError::conflict(["repo:foo", "repo:bar"]);
    assert_eq!(
        format!("{}", err),
        "resource conflict: repo:foo, repo:bar"
    );
}

#[test]
fn test_config_error() {
    let err = EngineError::Config("event_capacity must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: event_capacity must be greater than 0"
    );
}
