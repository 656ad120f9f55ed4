//! Spoken-form kana readings for Japanese numerals and counter words.
//!
//! The numeral reader turns a decimal quantity into its base reading
//! (`123` → `ひゃくにじゅうさん`), the day reader handles the lexical readings of
//! day-of-month values, and the counter dispatcher picks the right reading
//! strategy for a counter label such as 本, 歳 or 日.

pub mod counter;
pub mod numeral;
pub mod settings;
pub mod unicode;

pub use counter::{
    classify, counter_to_kana, read_day, supported_counters, CounterCategory, CounterError,
    CounterInfo,
};
pub use numeral::{normalize, read_normalized, read_numeral, NormalizedNumeral, NumeralError, Quantity};
