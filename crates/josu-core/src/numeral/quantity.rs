use std::borrow::Cow;

/// A caller-supplied quantity: either a native number or a numeric string.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity<'a> {
    Int(i128),
    Float(f64),
    Text(Cow<'a, str>),
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Quantity<'_> {
                fn from(n: $t) -> Self {
                    Quantity::Int(i128::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<isize> for Quantity<'_> {
    fn from(n: isize) -> Self {
        Quantity::Int(n as i128)
    }
}

impl From<usize> for Quantity<'_> {
    fn from(n: usize) -> Self {
        Quantity::Int(n as i128)
    }
}

impl From<f32> for Quantity<'_> {
    fn from(n: f32) -> Self {
        Quantity::Float(f64::from(n))
    }
}

impl From<f64> for Quantity<'_> {
    fn from(n: f64) -> Self {
        Quantity::Float(n)
    }
}

impl<'a> From<&'a str> for Quantity<'a> {
    fn from(s: &'a str) -> Self {
        Quantity::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Quantity<'a> {
    fn from(s: &'a String) -> Self {
        Quantity::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Quantity<'_> {
    fn from(s: String) -> Self {
        Quantity::Text(Cow::Owned(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("Input must be finite")]
    NonFinite,
    #[error("Invalid numeric format")]
    InvalidFormat,
    #[error("Input must be a number or numeric string")]
    NotNumeric,
}

/// A validated quantity split into sign, integer digits and fractional digits.
///
/// `integer` never has leading zeros and is at least `"0"`. `fraction` holds the
/// digits after the decimal point exactly as written, trailing zeros included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNumeral {
    pub negative: bool,
    pub integer: String,
    pub fraction: Option<String>,
}

impl NormalizedNumeral {
    pub fn is_zero(&self) -> bool {
        self.integer == "0" && !self.has_decimals()
    }

    /// True when the fractional part carries a non-zero digit (`5.00` is not decimal).
    pub fn has_decimals(&self) -> bool {
        self.fraction
            .as_deref()
            .is_some_and(|f| f.bytes().any(|b| b != b'0'))
    }

    /// True for a minus sign on a non-zero magnitude; `-0` is not negative.
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Last decimal digit of the integer part.
    pub fn last_digit(&self) -> u8 {
        self.integer.bytes().last().map_or(0, |b| b - b'0')
    }

    /// Fractional digits with trailing zeros removed; empty when nothing remains.
    pub fn trimmed_fraction(&self) -> &str {
        self.fraction
            .as_deref()
            .map_or("", |f| f.trim_end_matches('0'))
    }

    /// Unsigned integer part alone, for counters that read whole quantities.
    pub fn unsigned_integer(&self) -> NormalizedNumeral {
        NormalizedNumeral {
            negative: false,
            integer: self.integer.clone(),
            fraction: None,
        }
    }

    /// Integer value, when it fits in a `u64`.
    pub fn integer_value(&self) -> Option<u64> {
        self.integer.parse().ok()
    }
}

/// Validate a quantity and split it into its sign, integer and fractional parts.
pub fn normalize<'a>(quantity: impl Into<Quantity<'a>>) -> Result<NormalizedNumeral, NumeralError> {
    match quantity.into() {
        Quantity::Int(n) => parse_decimal(&n.to_string()),
        Quantity::Float(f) => {
            if !f.is_finite() {
                return Err(NumeralError::NonFinite);
            }
            // `Display` for f64 is the shortest round-trip form and never uses an exponent.
            parse_decimal(&f.to_string())
        }
        Quantity::Text(s) => parse_decimal(s.trim()),
    }
}

/// Parse `[+-]?[0-9]+(\.[0-9]+)?`.
fn parse_decimal(s: &str) -> Result<NormalizedNumeral, NumeralError> {
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (int_digits, fraction) = match unsigned.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, Some(frac_digits)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_digits) || !fraction.map_or(true, all_digits) {
        return Err(NumeralError::InvalidFormat);
    }

    let stripped = int_digits.trim_start_matches('0');
    let integer = if stripped.is_empty() { "0" } else { stripped };

    Ok(NormalizedNumeral {
        negative,
        integer: integer.to_string(),
        fraction: fraction.map(str::to_string),
    })
}
