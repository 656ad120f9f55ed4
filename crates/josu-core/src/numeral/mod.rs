//! Japanese number-to-kana reading.
//!
//! Reads a decimal quantity (`123`, `"-0045"`, `"3.14"`) as hiragana
//! (ひゃくにじゅうさん, よんじゅうご, さんてんいちよん). Integers are composed
//! from four-digit chunks joined by まん/おく/ちょう, with the sound-changed
//! hundreds and thousands (さんびゃく, はっせん). Fractional digits are read
//! one by one after てん. The sign is dropped: negative quantities read as
//! their magnitude.

mod quantity;
mod table;
#[cfg(test)]
mod tests;

pub use quantity::{normalize, NormalizedNumeral, NumeralError, Quantity};

use tracing::{debug, debug_span};

use table::{chunk_power, digit, irregular, pure_power, HUNDRED, TEN, THOUSAND, ZERO};

/// Read a number or numeric string as kana.
///
/// Fails only when the quantity is not a finite number or a well-formed
/// decimal string.
pub fn read_numeral<'a>(quantity: impl Into<Quantity<'a>>) -> Result<String, NumeralError> {
    let numeral = normalize(quantity)?;
    Ok(read_normalized(&numeral))
}

/// Read an already validated numeral.
pub fn read_normalized(numeral: &NormalizedNumeral) -> String {
    let _span = debug_span!("read_numeral", digits = numeral.integer.len()).entered();

    let fraction = numeral.trimmed_fraction();
    if numeral.integer == "0" && fraction.is_empty() {
        return ZERO.to_string();
    }

    let mut out = if numeral.integer == "0" {
        ZERO.to_string()
    } else {
        read_integer(&numeral.integer)
    };

    if !fraction.is_empty() {
        out.push_str(table::DECIMAL_POINT);
        for d in fraction.bytes() {
            out.push_str(digit(d));
        }
    }
    out
}

/// Read a non-zero integer with no leading zeros.
fn read_integer(digits: &str) -> String {
    if digits == table::ONE_CHOU_DIGITS {
        return table::ONE_CHOU.to_string();
    }

    let chunks = split_chunks(digits);
    debug!(chunk_count = chunks.len());

    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let reading = read_chunk(chunk);
        if reading.is_empty() {
            continue;
        }
        out.push_str(&reading);
        out.push_str(chunk_power(chunks.len() - 1 - i));
    }
    out
}

/// Split a digit string into four-digit groups counted from the right.
/// The leftmost group may be shorter.
fn split_chunks(digits: &str) -> Vec<&str> {
    let head = digits.len() % 4;
    let mut chunks = Vec::with_capacity(digits.len() / 4 + 1);
    if head > 0 {
        chunks.push(&digits[..head]);
    }
    let mut pos = head;
    while pos < digits.len() {
        chunks.push(&digits[pos..pos + 4]);
        pos += 4;
    }
    chunks
}

/// Read one group of up to four digits. All-zero groups read as "".
fn read_chunk(chunk: &str) -> String {
    let chunk = chunk.trim_start_matches('0');
    if chunk.is_empty() {
        return String::new();
    }
    if let Some(power) = pure_power(chunk) {
        return power.to_string();
    }
    if chunk.len() == 1 {
        return digit(chunk.as_bytes()[0]).to_string();
    }

    let mut out = String::new();
    for (i, d) in chunk.bytes().enumerate() {
        if d == b'0' {
            continue;
        }
        match chunk.len() - 1 - i {
            0 => out.push_str(digit(d)),
            1 => push_power(&mut out, d, TEN, None),
            2 => push_power(&mut out, d, HUNDRED, irregular(&format!("{}00", d as char))),
            _ => push_power(&mut out, d, THOUSAND, irregular(&format!("{}000", d as char))),
        }
    }
    out
}

/// `1` takes the bare power word, sound-changed forms win over composition.
fn push_power(out: &mut String, d: u8, power: &str, mutated: Option<&str>) {
    if let Some(m) = mutated {
        out.push_str(m);
    } else if d == b'1' {
        out.push_str(power);
    } else {
        out.push_str(digit(d));
        out.push_str(power);
    }
}
