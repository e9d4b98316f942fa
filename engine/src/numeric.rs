//! FILENAME: engine/src/numeric.rs
//! PURPOSE: Renders digit/grouping patterns against decimal quantities.
//! CONTEXT: The fraction is rendered left to right and the integer right
//! to left — grouping needs to count digits from the least significant
//! end — then the pieces concatenate as sign + integer + point +
//! fraction. The value is rounded (half up, on decimal digits) to the
//! pattern's fractional token count before either pass.

use pattern::NumericSegment;

use crate::decimal::NumericValue;

/// Render a tokenized numeric pattern against a value.
///
/// An empty pattern (zero segments) falls back to the value's own
/// digits at full stored precision, with a thousands-grouped integer
/// part. That is distinct from an absent pattern, which the façade
/// turns into an absent result before this renderer runs.
pub fn render_numeric(segments: &[NumericSegment], value: &NumericValue) -> String {
    if segments.is_empty() {
        return render_default(value);
    }

    let boundary = segments
        .iter()
        .position(|s| matches!(s, NumericSegment::DecimalPoint));
    let (int_group, frac_group): (&[NumericSegment], &[NumericSegment]) = match boundary {
        Some(at) => (&segments[..at], &segments[at + 1..]),
        None => (segments, &[]),
    };

    let precision = frac_group.iter().filter(|s| is_digit_token(s)).count();
    let rounded = value.round_half_up(precision);

    let fraction = render_fraction(frac_group, rounded.frac_digits());
    let integer = render_integer(int_group, rounded.int_digits());

    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }
    out.push_str(&integer);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

fn is_digit_token(segment: &NumericSegment) -> bool {
    matches!(
        segment,
        NumericSegment::DigitZero | NumericSegment::DigitHash
    )
}

/// Walk the fractional token group left to right. `0` always emits a
/// digit, padding past the value's precision; `#` emits only while a
/// significant digit remains, so a trailing run of zeros is suppressed.
fn render_fraction(group: &[NumericSegment], digits: &str) -> String {
    let digit_bytes = digits.as_bytes();
    let mut out = String::new();
    let mut position = 0usize;

    for segment in group {
        match segment {
            NumericSegment::DigitZero => {
                match digit_bytes.get(position) {
                    Some(byte) => out.push(*byte as char),
                    None => out.push('0'),
                }
                position += 1;
            }
            NumericSegment::DigitHash => {
                if position < digit_bytes.len()
                    && !digit_bytes[position..].iter().all(|b| *b == b'0')
                {
                    out.push(digit_bytes[position] as char);
                }
                position += 1;
            }
            NumericSegment::Literal(text) => out.push_str(text),
            // Grouping has no meaning right of the decimal point, and the
            // tokenizer only ever emits one DecimalPoint.
            NumericSegment::GroupSeparator | NumericSegment::DecimalPoint => {}
        }
    }

    out
}

/// Walk the integer token group right to left, consuming the value's
/// digits from the least significant end. Digits beyond the token count
/// keep flowing — patterns never truncate an integer part — and `0`
/// pads only up to the token count. Any `,` in the group turns on
/// grouping for the whole digit run, a separator before every third
/// emitted digit.
fn render_integer(group: &[NumericSegment], digits: &str) -> String {
    let grouping = group
        .iter()
        .any(|s| matches!(s, NumericSegment::GroupSeparator));
    let mut digit_tokens_left = group.iter().filter(|s| is_digit_token(s)).count();

    let mut reversed = String::new();
    let mut supply = digits.bytes().rev();
    let mut emitted = 0usize;

    for segment in group.iter().rev() {
        match segment {
            NumericSegment::DigitZero => {
                digit_tokens_left -= 1;
                let digit = supply.next().map(|b| b as char).unwrap_or('0');
                push_grouped_digit(&mut reversed, digit, &mut emitted, grouping);
            }
            NumericSegment::DigitHash => {
                digit_tokens_left -= 1;
                if let Some(byte) = supply.next() {
                    push_grouped_digit(&mut reversed, byte as char, &mut emitted, grouping);
                }
            }
            NumericSegment::Literal(text) => {
                // A literal left of every digit token is a prefix; the
                // value's overflow digits must land to its right.
                if digit_tokens_left == 0 {
                    flush_remaining(&mut reversed, &mut supply, &mut emitted, grouping);
                }
                for ch in text.chars().rev() {
                    reversed.push(ch);
                }
            }
            NumericSegment::GroupSeparator | NumericSegment::DecimalPoint => {}
        }
    }

    flush_remaining(&mut reversed, &mut supply, &mut emitted, grouping);
    reversed.chars().rev().collect()
}

fn push_grouped_digit(reversed: &mut String, digit: char, emitted: &mut usize, grouping: bool) {
    if grouping && *emitted > 0 && *emitted % 3 == 0 {
        reversed.push(',');
    }
    reversed.push(digit);
    *emitted += 1;
}

fn flush_remaining(
    reversed: &mut String,
    supply: &mut impl Iterator<Item = u8>,
    emitted: &mut usize,
    grouping: bool,
) {
    while let Some(byte) = supply.next() {
        push_grouped_digit(reversed, byte as char, emitted, grouping);
    }
}

/// The empty-pattern default: the value's native digits, thousands
/// grouping in the integer part, sign preserved, no rounding beyond the
/// value's own stored precision.
fn render_default(value: &NumericValue) -> String {
    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }
    let int_digits = value.int_digits();
    out.push_str(&group_thousands(if int_digits.is_empty() {
        "0"
    } else {
        int_digits
    }));
    if value.scale() > 0 {
        out.push('.');
        out.push_str(value.frac_digits());
    }
    out
}

/// Insert a comma before every third digit counted from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
