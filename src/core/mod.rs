//! Core debouncing abstractions.

pub mod debouncer;
pub mod error;
pub mod timer;

#[cfg(feature = "tokio-runtime")]
pub use debouncer::{debounce, debounce_with_delay};
pub use debouncer::{Debouncer, DEFAULT_DELAY, DEFAULT_DELAY_MS};
pub use error::DebounceError;
pub use timer::Schedule;
