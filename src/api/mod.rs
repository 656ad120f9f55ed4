//! UniFFI export layer: bindings for host applications.
//!
//! Quantities cross the boundary as strings, the exact input path.

mod reader;
mod types;

pub use reader::JosuReader;
pub use types::{JosuCounter, JosuError, JosuScript};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn read_numeral(input: String) -> Result<String, JosuError> {
    Ok(josu_core::read_numeral(input)?)
}

#[uniffi::export]
fn counter_to_kana(counter: String, quantity: String) -> Result<String, JosuError> {
    Ok(josu_core::counter_to_kana(&counter, quantity)?)
}

#[uniffi::export]
fn read_day(day: String) -> Result<String, JosuError> {
    Ok(josu_core::read_day(day)?)
}

#[uniffi::export]
fn supported_counters() -> Vec<JosuCounter> {
    josu_core::supported_counters()
        .into_iter()
        .map(JosuCounter::from)
        .collect()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), JosuError> {
    let content = std::fs::read_to_string(&path).map_err(|e| JosuError::Io {
        msg: format!("{path}: {e}"),
    })?;
    josu_core::settings::init_custom(content)?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    josu_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
