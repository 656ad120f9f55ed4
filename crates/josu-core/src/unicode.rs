//! Kana classification and script conversion for readings.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Check if a string is a non-empty hiragana reading.
///
/// The prolonged sound mark ー (U+30FC) is accepted alongside hiragana.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("じゅうっさつ"));
        assert!(is_hiragana_reading("はたち"));
        assert!(is_hiragana_reading("ぱーせんと"));
        assert!(!is_hiragana_reading("ホン"));
        assert!(!is_hiragana_reading("本"));
        assert!(!is_hiragana_reading("hon"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("いっぽん"), "イッポン");
        assert_eq!(hiragana_to_katakana("ひゃくまん"), "ヒャクマン");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("3本"), "3本");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('っ'));
        assert!(!is_hiragana('ッ'));
        assert!(!is_hiragana('ー'));
    }
}
