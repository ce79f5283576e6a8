//! Builders to construct debouncers from configuration.

pub mod debouncer_builder;

pub use debouncer_builder::DebouncerBuilder;
