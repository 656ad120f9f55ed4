//! Embedding surface for the counter reading engine.
//!
//! Re-exports the core readers, exposes them to host applications through
//! UniFFI, and handles JSON-encoded reading requests.

uniffi::setup_scaffolding!();

pub mod api;
pub mod request;
mod trace_init;

pub use josu_core::{
    classify, counter_to_kana, normalize, read_day, read_numeral, supported_counters,
    CounterCategory, CounterError, CounterInfo, NormalizedNumeral, NumeralError, Quantity,
};
pub use josu_core::{settings, unicode};
pub use trace_init::init_tracing;
