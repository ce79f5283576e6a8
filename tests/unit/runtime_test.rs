//! Tests for scheduler implementations

use std::time::Duration;

use prometheus_debounce::runtime::{ManualScheduler, ThreadScheduler, TokioScheduler};
use prometheus_debounce::Schedule;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_scheduler_schedule() {
    let scheduler = TokioScheduler::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    scheduler.schedule_after(Duration::from_millis(5), move || {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[test]
fn test_thread_scheduler_default_name() {
    assert_eq!(ThreadScheduler::default().thread_name(), "debounce-timer");
}

#[test]
fn test_manual_scheduler_debug() {
    let clock = ManualScheduler::new();
    clock.schedule_after(Duration::from_millis(1), || {});
    let rendered = format!("{clock:?}");
    assert!(rendered.contains("pending: 1"));
}
