//! Debouncer configuration structure.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{DebounceError, DEFAULT_DELAY_MS};

/// Debouncer configuration, suitable for embedding in a host's config file.
///
/// Missing fields fall back to their defaults. The delay is not validated:
/// zero is accepted and defers to the scheduler's next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period in milliseconds.
    pub delay_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl DebounceConfig {
    /// Configuration with an explicit delay in milliseconds.
    pub const fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    /// Quiet period as a `Duration`.
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self, DebounceError> {
        serde_json::from_str(input).map_err(|e| DebounceError::Config(format!("parse error: {e}")))
    }
}
