//! FILENAME: engine/src/decimal.rs
//! PURPOSE: Arbitrary-precision decimal value used by the numeric renderer.
//! CONTEXT: A quantity is kept as a plain digit string plus a scale, so
//! rounding happens on the decimal representation and never on a binary
//! float. Float inputs go through their shortest decimal text form
//! first; a `real` like 125.6f32 rounds as "125.6", not as the nearest
//! binary double.

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A decimal quantity: sign, digits, and the number of fractional digits.
///
/// `digits` holds ASCII digits only — no sign, no decimal point, no
/// leading zeros on the integer part. The last `scale` digits sit to the
/// right of the decimal point, so the integer part may be empty (`0.5`
/// stores digits `"5"` with scale 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericValue {
    negative: bool,
    digits: String,
    scale: usize,
}

impl NumericValue {
    /// Convert a double through its decimal text representation.
    pub fn from_f64(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NonFinite(value));
        }
        value.to_string().parse()
    }

    /// Convert a single-precision float through its own (shorter)
    /// decimal text representation.
    pub fn from_f32(value: f32) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NonFinite(value as f64));
        }
        value.to_string().parse()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }

    /// Fractional digit count.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Digits left of the decimal point; empty when the value is < 1.
    pub fn int_digits(&self) -> &str {
        &self.digits[..self.digits.len() - self.scale]
    }

    /// Digits right of the decimal point, exactly `scale` of them.
    pub fn frac_digits(&self) -> &str {
        &self.digits[self.digits.len() - self.scale..]
    }

    /// Round to `scale` fractional digits, half away from zero, on the
    /// decimal digits themselves. Rounding never widens: a value already
    /// at or below the target scale is returned unchanged.
    pub fn round_half_up(&self, scale: usize) -> NumericValue {
        if scale >= self.scale {
            return self.clone();
        }

        let keep = self.digits.len() - (self.scale - scale);
        let mut kept: String = self.digits[..keep].to_string();
        let round_up = self.digits.as_bytes()[keep] >= b'5';

        if round_up {
            kept = increment_digits(&kept);
        }

        NumericValue {
            negative: self.negative,
            digits: kept,
            scale,
        }
    }
}

/// Add one to a digit string, carrying as far as needed ("99" -> "100",
/// "" -> "1").
fn increment_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + 1);
    let mut carry = true;
    for ch in digits.chars().rev() {
        if carry && ch == '9' {
            out.push('0');
        } else if carry {
            out.push(char::from(ch as u8 + 1));
            carry = false;
        } else {
            out.push(ch);
        }
    }
    if carry {
        out.push('1');
    }
    out.chars().rev().collect()
}

impl std::str::FromStr for NumericValue {
    type Err = ValueError;

    /// Parse a plain decimal literal: optional sign, digits, optional
    /// fraction. Trailing fractional zeros are kept — "12.50" stores two
    /// fractional digits, which matters for the empty-pattern rendering.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };

        let all_digits =
            |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        let valid = match (int_part.is_empty(), frac_part.is_empty()) {
            (false, false) => all_digits(int_part) && all_digits(frac_part),
            (false, true) => all_digits(int_part) && !body.contains('.'),
            (true, false) => all_digits(frac_part),
            (true, true) => false,
        };
        if !valid {
            return Err(ValueError::InvalidNumeric(input.to_string()));
        }

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part.trim_start_matches('0'));
        digits.push_str(frac_part);

        Ok(NumericValue {
            negative,
            digits,
            scale: frac_part.len(),
        })
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        let digits = value.unsigned_abs().to_string();
        NumericValue {
            negative: value < 0,
            digits: digits.trim_start_matches('0').to_string(),
            scale: 0,
        }
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        NumericValue::from(value as i64)
    }
}

impl std::fmt::Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        let int_digits = self.int_digits();
        write!(f, "{}", if int_digits.is_empty() { "0" } else { int_digits })?;
        if self.scale > 0 {
            write!(f, ".{}", self.frac_digits())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(text: &str) -> NumericValue {
        text.parse().expect("valid numeric literal")
    }

    #[test]
    fn test_parse_splits_sign_int_and_fraction() {
        let value = num("-12345.678");
        assert!(value.is_negative());
        assert_eq!(value.int_digits(), "12345");
        assert_eq!(value.frac_digits(), "678");
        assert_eq!(value.scale(), 3);
    }

    #[test]
    fn test_parse_keeps_trailing_fractional_zeros() {
        assert_eq!(num("12.50").scale(), 2);
        assert_eq!(num("12.50").frac_digits(), "50");
    }

    #[test]
    fn test_parse_sub_one_value_has_empty_integer_part() {
        let value = num("0.05");
        assert_eq!(value.int_digits(), "");
        assert_eq!(value.frac_digits(), "05");
    }

    #[test]
    fn test_parse_bare_fraction_and_explicit_plus() {
        assert_eq!(num(".5").to_string(), "0.5");
        assert_eq!(num("+3.25").to_string(), "3.25");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<NumericValue>().is_err());
        assert!("abc".parse::<NumericValue>().is_err());
        assert!("1.2.3".parse::<NumericValue>().is_err());
        assert!("-".parse::<NumericValue>().is_err());
        assert!(".".parse::<NumericValue>().is_err());
    }

    #[test]
    fn test_from_floats_uses_decimal_text() {
        let double = NumericValue::from_f64(12345.678).expect("finite double");
        assert_eq!(double.to_string(), "12345.678");

        let single = NumericValue::from_f32(125.6).expect("finite single");
        assert_eq!(single.to_string(), "125.6");

        assert!(NumericValue::from_f64(f64::NAN).is_err());
        assert!(NumericValue::from_f32(f32::INFINITY).is_err());
    }

    #[test]
    fn test_round_half_up_basic() {
        assert_eq!(num("12345.678").round_half_up(2).to_string(), "12345.68");
        assert_eq!(num("125.6").round_half_up(0).to_string(), "126");
        assert_eq!(num("125.4").round_half_up(0).to_string(), "125");
        assert_eq!(num("-125.85").round_half_up(1).to_string(), "-125.9");
    }

    #[test]
    fn test_round_half_up_carries_across_digits() {
        assert_eq!(num("0.995").round_half_up(2).to_string(), "1.00");
        assert_eq!(num("9.99").round_half_up(1).to_string(), "10.0");
        assert_eq!(num("99.9").round_half_up(0).to_string(), "100");
    }

    #[test]
    fn test_round_half_up_is_idempotent_at_scale() {
        let rounded = num("12345.678").round_half_up(2);
        assert_eq!(rounded.round_half_up(2), rounded);
    }

    #[test]
    fn test_round_never_widens() {
        assert_eq!(num("1.5").round_half_up(4), num("1.5"));
    }

    #[test]
    fn test_rounding_to_zero_keeps_sign() {
        let value = num("-0.3").round_half_up(0);
        assert!(value.is_negative());
        assert!(value.is_zero());
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(NumericValue::from(-42i64).to_string(), "-42");
        assert_eq!(NumericValue::from(0i64).to_string(), "0");
        assert_eq!(NumericValue::from(7i32).to_string(), "7");
    }
}
