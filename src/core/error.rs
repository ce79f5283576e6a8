//! Error types for debouncer construction layers.

use thiserror::Error;

/// Errors produced while configuring debouncers.
///
/// Invoking a debouncer never fails; these only cover the surrounding
/// configuration surface.
#[derive(Debug, Error)]
pub enum DebounceError {
    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}
