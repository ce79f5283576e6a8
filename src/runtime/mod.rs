//! Scheduler implementations backing debouncer timers.

pub mod manual;
pub mod thread_timer;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_timer;

pub use manual::{ManualScheduler, ManualTimer};
pub use thread_timer::{ThreadScheduler, ThreadTimer};
#[cfg(feature = "tokio-runtime")]
pub use tokio_timer::TokioScheduler;
