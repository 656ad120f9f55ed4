//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call;
//!   once `settings()` has been read it fails with `AlreadyInitialized`
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::counter::is_builtin;
use crate::unicode::is_hiragana_reading;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Extra counters read as numeral + suffix: label → kana suffix.
    #[serde(default)]
    pub plain_counters: BTreeMap<String, String>,
}

impl Settings {
    pub fn plain_counter(&self, label: &str) -> Option<&str> {
        self.plain_counters.get(label).map(String::as_str)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    for (label, suffix) in &s.plain_counters {
        let field = format!("plain_counters.{label}");
        if label.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                field,
                reason: "counter label must not be blank".to_string(),
            });
        }
        if is_builtin(label) {
            return Err(SettingsError::InvalidValue {
                field,
                reason: "built-in counters cannot be redefined".to_string(),
            });
        }
        if !is_hiragana_reading(suffix) {
            return Err(SettingsError::InvalidValue {
                field,
                reason: "suffix must be a hiragana reading".to_string(),
            });
        }
    }
    Ok(())
}
