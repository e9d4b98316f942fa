//! End-to-end contract tests for the formatting engine: the exact
//! behavior the enclosing query engine relies on, one scenario per
//! observed case, plus the cross-domain properties.

use engine::{
    format_value, Formatter, IntervalValue, NumericValue, TemporalValue, TypedValue,
};

fn timestamp_17_31_12() -> TypedValue {
    // 1970-01-01T17:31:12.12345 as an epoch instant (millisecond
    // resolution: 63072 s and 123 ms).
    TemporalValue::from_epoch_millis(63_072_123)
        .expect("in range")
        .into()
}

fn number(text: &str) -> TypedValue {
    text.parse::<NumericValue>().expect("valid literal").into()
}

// ========================================
// TIMESTAMPS
// ========================================

#[test]
fn formats_timestamp_with_weekday_name_and_twelve_hour_clock() {
    assert_eq!(
        format_value(Some(&timestamp_17_31_12()), Some("Day,  DD  HH12:MI:SS")),
        Some("Thursday,  01  05:31:12".to_string())
    );
}

#[test]
fn timestamp_with_absent_pattern_is_absent() {
    assert_eq!(format_value(Some(&timestamp_17_31_12()), None), None);
}

#[test]
fn absent_value_is_absent_whatever_the_pattern() {
    assert_eq!(format_value(None, Some("EEEE, LLLL d - h:m a uuuu G")), None);
    assert_eq!(format_value(None, Some("")), None);
    assert_eq!(format_value(None, None), None);
}

#[test]
fn case_variants_of_a_name_token_differ_only_in_case() {
    let ts = timestamp_17_31_12();
    let lower = format_value(Some(&ts), Some("day")).expect("present inputs");
    let upper = format_value(Some(&ts), Some("DAY")).expect("present inputs");
    assert_eq!(lower.to_uppercase(), upper);
    assert_eq!(lower, "thursday");
}

// ========================================
// INTERVALS
// ========================================

#[test]
fn formats_interval_on_the_virtual_calendar_origin() {
    // 1 year 2 months 3 weeks 5 hours 6 minutes 7 seconds
    let interval = IntervalValue::new(1, 2, 3, 0, 5, 6, 7);
    assert_eq!(
        format_value(Some(&interval.into()), Some("YYYY MM DD HH12:MI:SS")),
        Some("0001 03 22 05:06:07".to_string())
    );
}

#[test]
fn interval_with_absent_pattern_is_absent() {
    let interval = IntervalValue::new(1, 2, 3, 0, 5, 6, 7);
    assert_eq!(format_value(Some(&interval.into()), None), None);
}

#[test]
fn interval_fields_render_unclamped() {
    let interval = IntervalValue::new(0, 0, 0, 40, 75, 0, 0);
    assert_eq!(
        format_value(Some(&interval.into()), Some("DD HH24")),
        Some("41 75".to_string())
    );
}

#[test]
fn calendar_name_tokens_on_an_interval_render_empty() {
    let interval = IntervalValue::new(1, 2, 3, 0, 5, 6, 7);
    assert_eq!(
        format_value(Some(&interval.into()), Some("Day MM")),
        Some(" 03".to_string())
    );
}

// ========================================
// NUMBERS
// ========================================

#[test]
fn formats_numbers_per_digit_patterns() {
    assert_eq!(
        format_value(Some(&number("12345.678")), Some("###,###.##")),
        Some("12,345.68".to_string())
    );
    let single = NumericValue::from_f32(125.6).expect("finite single");
    assert_eq!(
        format_value(Some(&single.into()), Some("0000")),
        Some("0126".to_string())
    );
    assert_eq!(
        format_value(Some(&number("-125.8")), Some("###.00")),
        Some("-125.80".to_string())
    );
}

#[test]
fn empty_numeric_pattern_renders_native_precision_grouped() {
    assert_eq!(
        format_value(Some(&number("12345.678")), Some("")),
        Some("12,345.678".to_string())
    );
    assert_eq!(
        format_value(Some(&number("-125.8")), Some("")),
        Some("-125.8".to_string())
    );
}

#[test]
fn numeric_with_absent_pattern_is_absent() {
    assert_eq!(format_value(Some(&number("12345.678")), None), None);
    assert_eq!(format_value(Some(&number("-125.8")), None), None);
}

#[test]
fn rounding_at_pattern_precision_is_idempotent() {
    let once = format_value(Some(&number("12345.678")), Some("###,###.##"))
        .expect("present inputs");
    let again = format_value(Some(&number(&once.replace(',', ""))), Some("###,###.##"))
        .expect("present inputs");
    assert_eq!(once, again);
}

#[test]
fn grouping_is_every_three_digits_at_any_magnitude() {
    for (value, expected) in [
        ("1", "1"),
        ("12", "12"),
        ("123", "123"),
        ("1234", "1,234"),
        ("1234567", "1,234,567"),
        ("1234567890123", "1,234,567,890,123"),
    ] {
        assert_eq!(
            format_value(Some(&number(value)), Some("#,###")),
            Some(expected.to_string())
        );
    }
}

#[test]
fn sign_is_preserved_at_every_precision() {
    for pattern in ["#", "#.#", "0.00", "#,##0.000", ""] {
        let rendered =
            format_value(Some(&number("-0.0004")), Some(pattern)).expect("present inputs");
        assert!(
            rendered.starts_with('-'),
            "pattern {:?} dropped the sign: {:?}",
            pattern,
            rendered
        );
    }
}

// ========================================
// FAÇADE
// ========================================

#[test]
fn a_formatter_instance_reuses_patterns_across_rows() {
    let formatter = Formatter::new();
    let rows = ["1.5", "22.25", "333.125"];
    let rendered: Vec<_> = rows
        .iter()
        .map(|row| formatter.format(Some(&number(row)), Some("#,##0.0")))
        .collect();
    assert_eq!(
        rendered,
        vec![
            Some("1.5".to_string()),
            Some("22.3".to_string()),
            Some("333.1".to_string()),
        ]
    );
}

#[test]
fn typed_values_round_trip_through_serde() {
    let original = timestamp_17_31_12();
    let encoded = serde_json::to_string(&original).expect("serializable");
    let decoded: TypedValue = serde_json::from_str(&encoded).expect("deserializable");
    assert_eq!(original, decoded);
}
