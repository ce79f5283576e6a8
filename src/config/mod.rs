//! Configuration models for debouncers.

pub mod debounce;

pub use debounce::DebounceConfig;
