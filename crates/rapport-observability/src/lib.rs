//! # rapport-observability
//!
//! Subscriber setup driven by [`ObservabilityConfig`](rapport_core::config::ObservabilityConfig)
//! and the span macros used around relationship, event, and insights operations.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
