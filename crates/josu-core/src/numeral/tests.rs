use proptest::prelude::*;

use super::*;
use crate::unicode::is_hiragana_reading;

fn read(s: &str) -> String {
    read_numeral(s).unwrap()
}

#[test]
fn zero_readings() {
    assert_eq!(read_numeral(0).unwrap(), "れい");
    assert_eq!(read("0"), "れい");
    assert_eq!(read("0000"), "れい");
    assert_eq!(read("-0"), "れい");
    assert_eq!(read("0.000"), "れい");
}

#[test]
fn single_digits() {
    let expected = [
        "れい", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
    ];
    for (n, want) in expected.iter().enumerate() {
        assert_eq!(read_numeral(n as u32).unwrap(), *want);
    }
}

#[test]
fn tens() {
    assert_eq!(read("10"), "じゅう");
    assert_eq!(read("11"), "じゅういち");
    assert_eq!(read("20"), "にじゅう");
    assert_eq!(read("45"), "よんじゅうご");
    assert_eq!(read("99"), "きゅうじゅうきゅう");
}

#[test]
fn hundreds() {
    assert_eq!(read("100"), "ひゃく");
    assert_eq!(read("101"), "ひゃくいち");
    assert_eq!(read("110"), "ひゃくじゅう");
    assert_eq!(read("200"), "にひゃく");
    assert_eq!(read("300"), "さんびゃく");
    assert_eq!(read("600"), "ろっぴゃく");
    assert_eq!(read("800"), "はっぴゃく");
    assert_eq!(read("345"), "さんびゃくよんじゅうご");
    assert_eq!(read("999"), "きゅうひゃくきゅうじゅうきゅう");
}

#[test]
fn thousands() {
    assert_eq!(read("1000"), "せん");
    assert_eq!(read("3000"), "さんぜん");
    assert_eq!(read("6000"), "ろくせん");
    assert_eq!(read("8000"), "はっせん");
    assert_eq!(read("1111"), "せんひゃくじゅういち");
    assert_eq!(read("8600"), "はっせんろっぴゃく");
    assert_eq!(read("9999"), "きゅうせんきゅうひゃくきゅうじゅうきゅう");
}

#[test]
fn large_units() {
    assert_eq!(read("10000"), "いちまん");
    assert_eq!(read("10001"), "いちまんいち");
    assert_eq!(read("100000"), "じゅうまん");
    assert_eq!(read("1000000"), "ひゃくまん");
    assert_eq!(read("10000000"), "せんまん");
    assert_eq!(read("30000000"), "さんぜんまん");
    assert_eq!(read("100000000"), "いちおく");
    assert_eq!(read("100010000"), "いちおくいちまん");
    assert_eq!(read("2000000000000"), "にちょう");
    assert_eq!(read("1000000000001"), "いちちょういち");
}

#[test]
fn chunks_beyond_chou_have_no_power_word() {
    // No word above ちょう: higher groups are read bare and run together.
    assert_eq!(read("10000000000000000"), "いち");
    assert_eq!(read("10000000000000000"), read("1"));
    assert_eq!(read("10000000000000001"), "いちいち");
    assert_eq!(read("20000000000000000000"), "にせん");
    assert_eq!(read("50001000000000000"), "ごいちちょう");
}

#[test]
fn one_chou_is_irregular() {
    assert_eq!(read_numeral(1_000_000_000_000u64).unwrap(), "いっちょう");
    assert_eq!(read("1000000000000"), "いっちょう");
    assert_eq!(read("0001000000000000"), "いっちょう");
}

#[test]
fn mixed_chunks() {
    assert_eq!(
        read_numeral(123_456_789).unwrap(),
        "いちおくにせんさんびゃくよんじゅうごまんろくせんななひゃくはちじゅうきゅう"
    );
    assert_eq!(read("12345"), "いちまんにせんさんびゃくよんじゅうご");
}

#[test]
fn leading_zeros_do_not_change_magnitude() {
    assert_eq!(read("000100"), "ひゃく");
    assert_eq!(read("007"), "なな");
}

#[test]
fn sign_is_dropped() {
    assert_eq!(read("-12"), "じゅうに");
    assert_eq!(read("+12"), "じゅうに");
    assert_eq!(read_numeral(-300).unwrap(), "さんびゃく");
}

#[test]
fn fractions() {
    assert_eq!(read("3.14"), "さんてんいちよん");
    assert_eq!(read("7.5"), "ななてんご");
    assert_eq!(read("7.50"), "ななてんご");
    assert_eq!(read("5.00"), "ご");
    assert_eq!(read("0.5"), "れいてんご");
    assert_eq!(read("0.01"), "れいてんれいいち");
    assert_eq!(read("10.05"), "じゅうてんれいご");
    assert_eq!(read("-0.5"), "れいてんご");
}

#[test]
fn float_input() {
    assert_eq!(read_numeral(0.1).unwrap(), "れいてんいち");
    assert_eq!(read_numeral(2.5f32).unwrap(), "にてんご");
    assert_eq!(read_numeral(300.0).unwrap(), "さんびゃく");
}

#[test]
fn string_inputs_are_trimmed() {
    assert_eq!(read(" 25 "), "にじゅうご");
}

#[test]
fn malformed_input() {
    assert_eq!(read_numeral("12a"), Err(NumeralError::InvalidFormat));
    assert_eq!(read_numeral("1."), Err(NumeralError::InvalidFormat));
    assert_eq!(read_numeral(""), Err(NumeralError::InvalidFormat));
    assert_eq!(read_numeral(f64::NAN), Err(NumeralError::NonFinite));
}

proptest! {
    #[test]
    fn leading_zero_invariance(d in "[0-9]{1,16}") {
        prop_assert_eq!(read(&d), read(&format!("000{d}")));
    }

    #[test]
    fn sign_invariance(d in "[0-9]{1,16}", f in proptest::option::of("[0-9]{1,6}")) {
        let n = match f {
            Some(f) => format!("{d}.{f}"),
            None => d,
        };
        prop_assert_eq!(read(&n), read(&format!("-{n}")));
    }

    #[test]
    fn trailing_fraction_zero_invariance(d in "[0-9]{1,12}", f in "[0-9]{1,6}") {
        prop_assert_eq!(read(&format!("{d}.{f}")), read(&format!("{d}.{f}00")));
        prop_assert_eq!(read(&d), read(&format!("{d}.000")));
    }

    #[test]
    fn chunk_boundary(n in 1u64..10_000) {
        let below = read_numeral(n).unwrap();
        prop_assert!(!below.contains("まん"));
        prop_assert_eq!(read_numeral(n * 10_000).unwrap(), format!("{below}まん"));
    }

    #[test]
    fn readings_are_hiragana(d in "[0-9]{1,16}", f in "[0-9]{0,4}") {
        let n = if f.is_empty() { d } else { format!("{d}.{f}") };
        prop_assert!(is_hiragana_reading(&read(&n)));
    }
}
