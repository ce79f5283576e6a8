//! Tests for utility functions

use std::time::Duration;

use prometheus_debounce::runtime::ManualScheduler;
use prometheus_debounce::util::init_tracing;
use prometheus_debounce::Debouncer;

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
}

#[test]
fn test_debouncer_logs_under_subscriber() {
    init_tracing();
    let clock = ManualScheduler::new();
    let debouncer = Debouncer::new(|_: u8| {}, Duration::from_millis(1), clock.clone());

    debouncer.call(1);
    debouncer.call(2);
    assert_eq!(clock.advance(Duration::from_millis(1)), 1);
}

#[test]
fn test_default_filter_targets_crate() {
    use prometheus_debounce::util::{default_env_filter, DEFAULT_FILTER};

    assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    assert!(DEFAULT_FILTER.contains("prometheus_debounce=debug"));
    let _filter = default_env_filter();
}
