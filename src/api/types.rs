use josu_core::settings::SettingsError;
use josu_core::{CounterError, CounterInfo, NumeralError};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum JosuError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("{msg}")]
    Invalid { msg: String },
}

impl From<NumeralError> for JosuError {
    fn from(e: NumeralError) -> Self {
        JosuError::Invalid { msg: e.to_string() }
    }
}

impl From<CounterError> for JosuError {
    fn from(e: CounterError) -> Self {
        JosuError::Invalid { msg: e.to_string() }
    }
}

impl From<SettingsError> for JosuError {
    fn from(e: SettingsError) -> Self {
        JosuError::Invalid { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Record)]
pub struct JosuCounter {
    pub label: String,
    pub category: String,
    pub example: String,
}

impl From<CounterInfo> for JosuCounter {
    fn from(info: CounterInfo) -> Self {
        JosuCounter {
            label: info.label,
            category: info.category.to_string(),
            example: info.example,
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kana script of returned readings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, uniffi::Enum)]
pub enum JosuScript {
    #[default]
    Hiragana,
    Katakana,
}

impl JosuScript {
    pub fn render(self, reading: String) -> String {
        match self {
            JosuScript::Hiragana => reading,
            JosuScript::Katakana => josu_core::unicode::hiragana_to_katakana(&reading),
        }
    }
}
