//! System-level state that is not persisted
//!
//! Currently the request counters served by `/stats`.

/// Per-endpoint request counters backed by prometheus
pub mod counters;

pub use counters::{Counter, CounterSnapshot, RequestCounters};
