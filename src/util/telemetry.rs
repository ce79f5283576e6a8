//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid: warnings from
/// everything, plus scheduling and firing records from debouncers.
pub const DEFAULT_FILTER: &str = "warn,prometheus_debounce=debug";

/// Build the filter `init_tracing` installs, preferring `RUST_LOG`.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/telemetry. Users can install their own subscriber; this
/// helper installs a default env-based subscriber if none is set.
///
/// Debouncers log with a `debouncer` field holding their id: `debug` for
/// scheduling and firing, `trace` for superseded calls, `error` for panicking
/// actions.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_env_filter())
        .with_target(true)
        .try_init();
}
