//! Builder for debouncers bound to a chosen scheduler.

use std::time::Duration;

use crate::config::DebounceConfig;
use crate::core::{Debouncer, Schedule, DEFAULT_DELAY};

/// Collects a delay and a scheduler, then wraps actions into debouncers.
///
/// ```rust,ignore
/// use prometheus_debounce::builders::DebouncerBuilder;
/// use prometheus_debounce::config::DebounceConfig;
/// use prometheus_debounce::runtime::ThreadScheduler;
///
/// let cfg = DebounceConfig::from_json_str(r#"{ "delay_ms": 250 }"#)?;
/// let save = DebouncerBuilder::from_config(&cfg, ThreadScheduler::new())
///     .build(|doc: String| persist(doc));
/// save.call(draft);
/// ```
#[derive(Debug, Clone)]
pub struct DebouncerBuilder<S> {
    delay: Duration,
    scheduler: S,
}

impl<S> DebouncerBuilder<S>
where
    S: Schedule,
{
    /// Start a builder with [`DEFAULT_DELAY`].
    pub const fn new(scheduler: S) -> Self {
        Self {
            delay: DEFAULT_DELAY,
            scheduler,
        }
    }

    /// Start a builder from configuration.
    pub const fn from_config(cfg: &DebounceConfig, scheduler: S) -> Self {
        Self {
            delay: cfg.delay(),
            scheduler,
        }
    }

    /// Override the quiet period.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Quiet period the built debouncer will use.
    pub const fn configured_delay(&self) -> Duration {
        self.delay
    }

    /// Wrap `action` into a debouncer.
    pub fn build<F, Args>(self, action: F) -> Debouncer<F, Args, S>
    where
        F: Fn(Args) + Send + Sync + 'static,
        Args: Send + 'static,
    {
        Debouncer::new(action, self.delay, self.scheduler)
    }
}
