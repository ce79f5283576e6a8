//! # Prometheus Debounce
//!
//! Trailing-edge debouncing for event-driven code.
//!
//! A debouncer wraps an action so that a burst of calls collapses into a
//! single deferred execution. Each call cancels the pending execution and
//! schedules a new one; once the delay passes without another call, the action
//! runs exactly once with the arguments of the most recent call.
//!
//! ## Key Features
//!
//! - **Last Call Wins**: Superseded arguments are dropped, never merged
//! - **One Pending Timer**: Each wrapper owns at most one scheduled execution
//! - **Pluggable Timing**: Tokio tasks, OS threads, or a manual virtual clock
//! - **Never Synchronous**: A zero delay still defers to the next scheduler tick
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use prometheus_debounce::{debounce, debounce_with_delay};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Default 400ms quiet period.
//!     let search = debounce(|query: String| println!("searching for {query}"));
//!     search("r".into());
//!     search("ru".into());
//!     search("rust".into()); // only "rust" is searched
//!
//!     // Several arguments travel as a tuple.
//!     let resize = debounce_with_delay(
//!         |(w, h): (u32, u32)| println!("{w}x{h}"),
//!         Duration::from_millis(100),
//!     );
//!     resize((640, 480));
//! }
//! ```
//!
//! ## Explicit Schedulers
//!
//! Outside Tokio, build a [`Debouncer`] against another [`Schedule`]
//! implementation:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use prometheus_debounce::Debouncer;
//! use prometheus_debounce::runtime::ManualScheduler;
//!
//! let clock = ManualScheduler::new();
//! let debouncer = Debouncer::new(
//!     |n: u32| println!("{n}"),
//!     Duration::from_millis(50),
//!     clock.clone(),
//! );
//! debouncer.call(1);
//! debouncer.call(2);
//! clock.advance(Duration::from_millis(50)); // prints 2
//! ```
//!
//! ## Action Failures
//!
//! A panicking action is logged through `tracing` and then keeps unwinding
//! into whichever scheduler fired it.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core debouncing abstractions.
pub mod core;
/// Configuration models for debouncers.
pub mod config;
/// Builders to construct debouncers from configuration.
pub mod builders;
/// Scheduler implementations (Tokio, OS threads, virtual clock).
pub mod runtime;
/// Shared utilities.
pub mod util;

#[cfg(feature = "tokio-runtime")]
pub use crate::core::{debounce, debounce_with_delay};
pub use crate::core::{DebounceError, Debouncer, Schedule, DEFAULT_DELAY, DEFAULT_DELAY_MS};
