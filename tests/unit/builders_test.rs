//! Tests for builder modules

use std::time::Duration;

use prometheus_debounce::builders::DebouncerBuilder;
use prometheus_debounce::config::DebounceConfig;
use prometheus_debounce::runtime::ManualScheduler;
use prometheus_debounce::DEFAULT_DELAY;

#[test]
fn test_builder_defaults() {
    let builder = DebouncerBuilder::new(ManualScheduler::new());
    assert_eq!(builder.configured_delay(), DEFAULT_DELAY);
}

#[test]
fn test_builder_from_config() {
    let builder = DebouncerBuilder::from_config(&DebounceConfig::new(75), ManualScheduler::new());
    assert_eq!(builder.configured_delay(), Duration::from_millis(75));
}

#[test]
fn test_builder_delay_override() {
    let clock = ManualScheduler::new();
    let debouncer = DebouncerBuilder::new(clock.clone())
        .delay(Duration::from_millis(5))
        .build(|_: u8| {});

    assert_eq!(debouncer.delay(), Duration::from_millis(5));
    debouncer.call(1);
    assert_eq!(clock.pending(), 1);
    assert_eq!(clock.advance(Duration::from_millis(5)), 1);
}
