//! Tests for error types

use prometheus_debounce::config::DebounceConfig;
use prometheus_debounce::DebounceError;

#[test]
fn test_config_error_display() {
    let err = DebounceError::Config("bad input".to_string());
    assert_eq!(format!("{}", err), "config error: bad input");
}

#[test]
fn test_parse_failure_is_config_error() {
    let err = DebounceConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, DebounceError::Config(_)));
    assert!(err.to_string().starts_with("config error: parse error:"));
}
