//! Counter tables: which labels exist, and how each one changes its suffix
//! with the last digit of the quantity.
//!
//! These are observed readings, not a phonological rule. 冊, 回 and 分 use an
//! elongated form (じゅうっさつ) for multiples of ten where other counters
//! geminate (じゅっぽん); keep them that way.

use std::borrow::Cow;

use super::CounterCategory;

pub const AGE_LABELS: [&str; 2] = ["歳", "才"];
pub const AGE_SUFFIX: &str = "さい";
/// Reading of age 20.
pub const HATACHI: &str = "はたち";

pub const DATE_LABEL: &str = "日";
pub const DAY_SUFFIX: &str = "にち";

/// How the counter suffix attaches to the numeral reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixVariant {
    /// Numeral + suffix.
    Plain(&'static str),
    /// Numeral + voiced suffix (さんぼん).
    Voiced(&'static str),
    /// Final mora of the numeral becomes っ (いち → いっ, じゅう → じゅっ).
    Geminated(&'static str),
    /// Numeral + っ + suffix (じゅうっさつ).
    Elongated(&'static str),
    /// Trailing `from` of the numeral replaced by `to` (よん → よ).
    Restem {
        from: &'static str,
        to: &'static str,
        suffix: &'static str,
    },
}

impl SuffixVariant {
    pub fn suffix(&self) -> &'static str {
        match *self {
            Self::Plain(s) | Self::Voiced(s) | Self::Geminated(s) | Self::Elongated(s) => s,
            Self::Restem { suffix, .. } => suffix,
        }
    }

    pub fn apply(&self, numeral: &str) -> String {
        match *self {
            Self::Plain(suffix) | Self::Voiced(suffix) => format!("{numeral}{suffix}"),
            Self::Geminated(suffix) => format!("{}{suffix}", geminate(numeral)),
            Self::Elongated(suffix) => format!("{numeral}っ{suffix}"),
            Self::Restem { from, to, suffix } => match numeral.strip_suffix(from) {
                Some(stem) => format!("{stem}{to}{suffix}"),
                None => format!("{numeral}{suffix}"),
            },
        }
    }
}

/// Replace the final mora with っ. Stems that cannot geminate (ending in ん)
/// are returned unchanged.
fn geminate(numeral: &str) -> Cow<'_, str> {
    if let Some(stem) = numeral.strip_suffix("じゅう") {
        return Cow::Owned(format!("{stem}じゅっ"));
    }
    match numeral
        .strip_suffix('ち')
        .or_else(|| numeral.strip_suffix('く'))
    {
        Some(stem) => Cow::Owned(format!("{stem}っ")),
        None => Cow::Borrowed(numeral),
    }
}

/// Per-digit suffix rules for one counter.
#[derive(Debug, PartialEq, Eq)]
pub struct InflectionRule {
    pub label: &'static str,
    /// Indexed by the last decimal digit of the quantity.
    pub by_last_digit: [SuffixVariant; 10],
    /// Used for a quantity of exactly zero.
    pub zero: SuffixVariant,
}

impl InflectionRule {
    pub fn variant(&self, last_digit: u8, is_zero: bool) -> SuffixVariant {
        if is_zero {
            self.zero
        } else {
            self.by_last_digit[usize::from(last_digit)]
        }
    }
}

use SuffixVariant::{Elongated as E, Geminated as G, Plain as P, Voiced as V};

pub static INFLECTED: [InflectionRule; 7] = [
    InflectionRule {
        label: "本",
        by_last_digit: [
            G("ぽん"), G("ぽん"), P("ほん"), V("ぼん"), P("ほん"),
            P("ほん"), G("ぽん"), P("ほん"), G("ぽん"), P("ほん"),
        ],
        zero: P("ほん"),
    },
    InflectionRule {
        label: "匹",
        by_last_digit: [
            G("ぴき"), G("ぴき"), P("ひき"), V("びき"), P("ひき"),
            P("ひき"), G("ぴき"), P("ひき"), G("ぴき"), P("ひき"),
        ],
        zero: P("ひき"),
    },
    InflectionRule {
        label: "個",
        by_last_digit: [
            G("こ"), G("こ"), P("こ"), P("こ"), P("こ"),
            P("こ"), G("こ"), P("こ"), G("こ"), P("こ"),
        ],
        zero: P("こ"),
    },
    InflectionRule {
        label: "杯",
        by_last_digit: [
            G("ぱい"), G("ぱい"), P("はい"), V("ばい"), P("はい"),
            P("はい"), P("はい"), P("はい"), G("ぱい"), P("はい"),
        ],
        zero: P("はい"),
    },
    InflectionRule {
        label: "冊",
        by_last_digit: [
            E("さつ"), G("さつ"), P("さつ"), P("さつ"), P("さつ"),
            P("さつ"), P("さつ"), P("さつ"), P("さつ"), P("さつ"),
        ],
        zero: P("さつ"),
    },
    InflectionRule {
        label: "回",
        by_last_digit: [
            E("かい"), G("かい"), P("かい"), P("かい"), P("かい"),
            P("かい"), G("かい"), P("かい"), P("かい"), P("かい"),
        ],
        zero: P("かい"),
    },
    InflectionRule {
        label: "分",
        by_last_digit: [
            E("ぷん"), G("ぷん"), P("ふん"), V("ぷん"), P("ふん"),
            P("ふん"), P("ふん"), P("ふん"), P("ふん"), P("ふん"),
        ],
        zero: P("ふん"),
    },
];

/// Counters whose suffix does not depend on the quantity. 年 only rewrites
/// a trailing よん to よ.
pub const PLAIN: [(&str, SuffixVariant); 7] = [
    ("枚", P("まい")),
    ("円", P("えん")),
    ("時間", P("じかん")),
    ("台", P("だい")),
    ("番", P("ばん")),
    ("秒", P("びょう")),
    ("年", NEN),
];

const NEN: SuffixVariant = SuffixVariant::Restem {
    from: "よん",
    to: "よ",
    suffix: "ねん",
};

/// Category of a built-in counter, ignoring configured ones.
pub fn builtin(label: &str) -> Option<CounterCategory> {
    if AGE_LABELS.contains(&label) {
        return Some(CounterCategory::Age);
    }
    if label == DATE_LABEL {
        return Some(CounterCategory::Date);
    }
    if let Some(rule) = INFLECTED.iter().find(|r| r.label == label) {
        return Some(CounterCategory::Inflected(rule));
    }
    PLAIN
        .iter()
        .find(|(l, _)| *l == label)
        .map(|&(_, variant)| CounterCategory::Plain(variant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemination() {
        assert_eq!(geminate("いち"), "いっ");
        assert_eq!(geminate("はち"), "はっ");
        assert_eq!(geminate("ろく"), "ろっ");
        assert_eq!(geminate("じゅう"), "じゅっ");
        assert_eq!(geminate("ひゃく"), "ひゃっ");
        assert_eq!(geminate("にじゅういち"), "にじゅういっ");
        assert_eq!(geminate("せん"), "せん");
    }

    #[test]
    fn variants_apply() {
        assert_eq!(P("ほん").apply("に"), "にほん");
        assert_eq!(V("ぼん").apply("さん"), "さんぼん");
        assert_eq!(G("ぽん").apply("ろく"), "ろっぽん");
        assert_eq!(E("さつ").apply("じゅう"), "じゅうっさつ");
        assert_eq!(NEN.apply("じゅうよん"), "じゅうよねん");
        assert_eq!(NEN.apply("ご"), "ごねん");
        assert_eq!(NEN.suffix(), "ねん");
    }

    #[test]
    fn builtin_lookup() {
        assert_eq!(builtin("歳"), Some(CounterCategory::Age));
        assert_eq!(builtin("才"), Some(CounterCategory::Age));
        assert_eq!(builtin("日"), Some(CounterCategory::Date));
        assert_eq!(builtin("枚"), Some(CounterCategory::Plain(P("まい"))));
        assert_eq!(builtin("年"), Some(CounterCategory::Plain(NEN)));
        assert!(matches!(builtin("冊"), Some(CounterCategory::Inflected(r)) if r.label == "冊"));
        assert_eq!(builtin("人"), None);
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = AGE_LABELS.to_vec();
        labels.push(DATE_LABEL);
        labels.extend(INFLECTED.iter().map(|r| r.label));
        labels.extend(PLAIN.iter().map(|(l, _)| *l));
        let count = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), count);
    }
}
