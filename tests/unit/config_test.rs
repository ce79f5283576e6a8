//! Tests for configuration parsing

use std::time::Duration;

use prometheus_debounce::config::DebounceConfig;
use prometheus_debounce::DEFAULT_DELAY;

#[test]
fn test_default_config() {
    let config = DebounceConfig::default();
    assert_eq!(config.delay_ms, 400);
    assert_eq!(config.delay(), DEFAULT_DELAY);
}

#[test]
fn test_config_from_json() {
    let config = DebounceConfig::from_json_str(r#"{ "delay_ms": 125 }"#).unwrap();
    assert_eq!(config, DebounceConfig::new(125));
    assert_eq!(config.delay(), Duration::from_millis(125));
}

#[test]
fn test_config_from_empty_json_uses_default() {
    let config = DebounceConfig::from_json_str("{}").unwrap();
    assert_eq!(config, DebounceConfig::default());
}

#[test]
fn test_config_zero_delay_accepted() {
    let config = DebounceConfig::from_json_str(r#"{ "delay_ms": 0 }"#).unwrap();
    assert_eq!(config.delay(), Duration::ZERO);
}

#[test]
fn test_config_rejects_negative_delay() {
    assert!(DebounceConfig::from_json_str(r#"{ "delay_ms": -5 }"#).is_err());
}

#[test]
fn test_config_rejects_non_numeric_delay() {
    assert!(DebounceConfig::from_json_str(r#"{ "delay_ms": "soon" }"#).is_err());
}

#[test]
fn test_config_serializes() {
    let json = serde_json::to_string(&DebounceConfig::new(50)).unwrap();
    assert_eq!(json, r#"{"delay_ms":50}"#);
}
