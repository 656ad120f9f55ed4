//! Fixed kana tables for digits, power words and the sound-changed
//! hundreds/thousands readings.

pub const ZERO: &str = "れい";
pub const DECIMAL_POINT: &str = "てん";

/// Reading of exactly 10^12, which does not follow chunk composition.
pub const ONE_CHOU: &str = "いっちょう";
pub const ONE_CHOU_DIGITS: &str = "1000000000000";

const DIGITS: [&str; 10] = [
    ZERO, "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
];

pub const TEN: &str = "じゅう";
pub const HUNDRED: &str = "ひゃく";
pub const THOUSAND: &str = "せん";

/// Power words appended after a four-digit chunk, indexed by the chunk's
/// distance from the rightmost chunk. Index 0 (the rightmost chunk) has none.
const CHUNK_POWERS: [&str; 4] = ["", "まん", "おく", "ちょう"];

/// Bare name of a single ASCII digit.
pub fn digit(d: u8) -> &'static str {
    DIGITS[usize::from(d - b'0')]
}

/// Power word for a chunk `distance` groups left of the rightmost one.
/// Groups beyond ちょう get nothing and are simply concatenated.
pub fn chunk_power(distance: usize) -> &'static str {
    CHUNK_POWERS.get(distance).copied().unwrap_or("")
}

/// Sound-changed readings keyed by the digit and its trailing zeros within a chunk.
/// Only hundreds and thousands mutate.
pub fn irregular(key: &str) -> Option<&'static str> {
    match key {
        "300" => Some("さんびゃく"),
        "600" => Some("ろっぴゃく"),
        "800" => Some("はっぴゃく"),
        "3000" => Some("さんぜん"),
        "8000" => Some("はっせん"),
        _ => None,
    }
}

/// Reading of a chunk that is a bare power of ten.
pub fn pure_power(chunk: &str) -> Option<&'static str> {
    match chunk {
        "10" => Some(TEN),
        "100" => Some(HUNDRED),
        "1000" => Some(THOUSAND),
        _ => None,
    }
}
