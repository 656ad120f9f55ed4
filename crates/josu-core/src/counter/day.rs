use tracing::debug_span;

use super::table::DAY_SUFFIX;
use super::CounterError;
use crate::numeral::{normalize, read_normalized, Quantity};

/// Days of the month with their own word instead of numeral + にち.
fn lexical_day(day: u64) -> Option<&'static str> {
    match day {
        1 => Some("ついたち"),
        2 => Some("ふつか"),
        3 => Some("みっか"),
        4 => Some("よっか"),
        5 => Some("いつか"),
        6 => Some("むいか"),
        7 => Some("なのか"),
        8 => Some("ようか"),
        9 => Some("ここのか"),
        10 => Some("とおか"),
        14 => Some("じゅうよっか"),
        20 => Some("はつか"),
        24 => Some("にじゅうよっか"),
        _ => None,
    }
}

/// Read a day-of-month style quantity (ついたち, とおか, にじゅうごにち).
///
/// The day must be a positive whole number.
pub fn read_day<'a>(quantity: impl Into<Quantity<'a>>) -> Result<String, CounterError> {
    let _span = debug_span!("read_day").entered();

    let numeral = normalize(quantity)?;
    if numeral.has_decimals() {
        return Err(CounterError::DayDecimals);
    }
    if numeral.is_zero() || numeral.is_negative() {
        return Err(CounterError::DayNotPositive);
    }

    if let Some(word) = numeral.integer_value().and_then(lexical_day) {
        return Ok(word.to_string());
    }
    let mut out = read_normalized(&numeral.unsigned_integer());
    out.push_str(DAY_SUFFIX);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_days() {
        let expected = [
            (1, "ついたち"),
            (2, "ふつか"),
            (3, "みっか"),
            (4, "よっか"),
            (5, "いつか"),
            (6, "むいか"),
            (7, "なのか"),
            (8, "ようか"),
            (9, "ここのか"),
            (10, "とおか"),
            (14, "じゅうよっか"),
            (20, "はつか"),
            (24, "にじゅうよっか"),
        ];
        for (day, word) in expected {
            assert_eq!(read_day(day).unwrap(), word, "day {day}");
        }
    }

    #[test]
    fn regular_days() {
        assert_eq!(read_day(11).unwrap(), "じゅういちにち");
        assert_eq!(read_day(25).unwrap(), "にじゅうごにち");
        assert_eq!(read_day(31).unwrap(), "さんじゅういちにち");
        assert_eq!(read_day(100).unwrap(), "ひゃくにち");
    }

    #[test]
    fn normalizes_like_numerals() {
        assert_eq!(read_day("+07").unwrap(), "なのか");
        assert_eq!(read_day(" 024 ").unwrap(), "にじゅうよっか");
        assert_eq!(read_day("3.00").unwrap(), "みっか");
        assert_eq!(read_day(12.0).unwrap(), "じゅうににち");
    }

    #[test]
    fn rejects_decimals() {
        assert_eq!(read_day("1.5"), Err(CounterError::DayDecimals));
        assert_eq!(read_day(0.5), Err(CounterError::DayDecimals));
        assert_eq!(read_day("-2.5"), Err(CounterError::DayDecimals));
        assert_eq!(
            CounterError::DayDecimals.to_string(),
            "Day must not have decimals"
        );
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(read_day(0), Err(CounterError::DayNotPositive));
        assert_eq!(read_day("000"), Err(CounterError::DayNotPositive));
        assert_eq!(read_day(-3), Err(CounterError::DayNotPositive));
        assert_eq!(read_day("-0"), Err(CounterError::DayNotPositive));
        assert_eq!(CounterError::DayNotPositive.to_string(), "Day must be positive");
    }

    #[test]
    fn propagates_format_errors() {
        let err = read_day("tomorrow").unwrap_err();
        assert_eq!(err.to_string(), "Invalid numeric format");
    }
}
