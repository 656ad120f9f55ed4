//! Counter-word readings (いっぽん, さんびき, はたち, ついたち).
//!
//! Every label belongs to exactly one category, checked in order: age, date,
//! digit-inflected, plain. The category decides how the quantity is validated
//! and how the suffix attaches to the numeral reading.

mod day;
mod table;

pub use day::read_day;
pub use table::{InflectionRule, SuffixVariant};

use tracing::{debug, debug_span};

use crate::numeral::{normalize, read_normalized, NumeralError, Quantity};
use crate::settings::settings;
use table::{AGE_LABELS, AGE_SUFFIX, DATE_LABEL, HATACHI, INFLECTED, PLAIN};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error(transparent)]
    Numeral(#[from] NumeralError),
    #[error("Age must not have decimals")]
    AgeDecimals,
    #[error("Day must not have decimals")]
    DayDecimals,
    #[error("Day must be positive")]
    DayNotPositive,
    #[error("{0}: digit-inflected counters do not support decimals")]
    Decimals(String),
    #[error("{0}: digit-inflected counters require a non-negative quantity")]
    Negative(String),
    #[error("Counter {0} is not supported")]
    Unsupported(String),
}

/// How a counter reads its quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterCategory {
    /// 歳, 才: whole numbers + さい, with 20 read はたち.
    Age,
    /// 日: lexical day words, otherwise + にち.
    Date,
    /// Suffix sound change chosen by the last digit.
    Inflected(&'static InflectionRule),
    /// Suffix independent of the digits; decimals and negatives allowed.
    Plain(SuffixVariant),
}

impl CounterCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Date => "date",
            Self::Inflected(_) => "inflected",
            Self::Plain(_) => "plain",
        }
    }
}

/// Look up the category of a counter label, including counters added in settings.
pub fn classify(label: &str) -> Option<CounterCategory> {
    table::builtin(label).or_else(|| {
        settings()
            .plain_counter(label)
            .map(|suffix| CounterCategory::Plain(SuffixVariant::Plain(suffix)))
    })
}

/// Whether `label` is one of the built-in counters.
pub fn is_builtin(label: &str) -> bool {
    table::builtin(label).is_some()
}

/// Read `quantity` followed by the counter `label` as kana.
///
/// ```
/// use josu_core::counter_to_kana;
///
/// assert_eq!(counter_to_kana("本", 3).unwrap(), "さんぼん");
/// assert_eq!(counter_to_kana("歳", 20).unwrap(), "はたち");
/// assert!(counter_to_kana("人", 2).is_err());
/// ```
pub fn counter_to_kana<'a>(
    label: &str,
    quantity: impl Into<Quantity<'a>>,
) -> Result<String, CounterError> {
    let category = classify(label).ok_or_else(|| CounterError::Unsupported(label.to_string()))?;
    let _span = debug_span!("counter_to_kana", label, category = category.name()).entered();

    match category {
        CounterCategory::Age => read_age(quantity),
        CounterCategory::Date => read_day(quantity),
        CounterCategory::Inflected(rule) => read_inflected(rule, quantity),
        CounterCategory::Plain(variant) => read_plain(variant, quantity),
    }
}

fn read_plain<'a>(
    variant: SuffixVariant,
    quantity: impl Into<Quantity<'a>>,
) -> Result<String, CounterError> {
    let numeral = normalize(quantity)?;
    let reading = read_normalized(&numeral);
    // Stem rewrites only apply to whole numbers (よねん, but よんてんよんねん).
    if numeral.has_decimals() {
        Ok(format!("{reading}{}", variant.suffix()))
    } else {
        Ok(variant.apply(&reading))
    }
}

fn read_age<'a>(quantity: impl Into<Quantity<'a>>) -> Result<String, CounterError> {
    let numeral = normalize(quantity)?;
    if numeral.has_decimals() {
        return Err(CounterError::AgeDecimals);
    }
    if numeral.integer == "20" {
        return Ok(HATACHI.to_string());
    }
    let mut out = read_normalized(&numeral.unsigned_integer());
    out.push_str(AGE_SUFFIX);
    Ok(out)
}

fn read_inflected<'a>(
    rule: &InflectionRule,
    quantity: impl Into<Quantity<'a>>,
) -> Result<String, CounterError> {
    let numeral = normalize(quantity)?;
    if numeral.has_decimals() {
        return Err(CounterError::Decimals(rule.label.to_string()));
    }
    if numeral.is_negative() {
        return Err(CounterError::Negative(rule.label.to_string()));
    }

    // Only the suffix depends on the last digit; the prefix reads the whole number.
    let variant = rule.variant(numeral.last_digit(), numeral.is_zero());
    debug!(last_digit = numeral.last_digit(), ?variant);
    Ok(variant.apply(&read_normalized(&numeral.unsigned_integer())))
}

/// A supported counter with a sample reading for the quantity 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterInfo {
    pub label: String,
    pub category: &'static str,
    pub example: String,
}

/// Every counter `counter_to_kana` accepts: built-ins first, then configured ones.
pub fn supported_counters() -> Vec<CounterInfo> {
    let builtin = AGE_LABELS
        .iter()
        .copied()
        .chain([DATE_LABEL])
        .chain(INFLECTED.iter().map(|r| r.label))
        .chain(PLAIN.iter().map(|(l, _)| *l));
    let configured = settings().plain_counters.keys().map(String::as_str);

    builtin
        .chain(configured)
        .filter_map(|label| {
            let category = classify(label)?;
            Some(CounterInfo {
                label: label.to_string(),
                category: category.name(),
                example: counter_to_kana(label, 1).unwrap_or_default(),
            })
        })
        .collect()
}
