//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the value-formatting engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//!
//! The engine renders a typed value (timestamp, interval, or decimal
//! number) against a textual pattern and returns the display string, or
//! nothing when either input is absent. Pattern tokenization lives in
//! the `pattern` crate; this crate owns the value model, the three
//! domain renderers, the locale-name seam, and the dispatch façade.

pub mod datetime;
pub mod decimal;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod numeric;
pub mod value;

// Re-export commonly used types at the crate root
pub use decimal::NumericValue;
pub use error::ValueError;
pub use formatter::{format_value, Formatter, PatternCache};
pub use locale::{EnglishNames, LocaleNames};
pub use value::{IntervalValue, NormalizedInterval, TemporalValue, TypedValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_a_timestamp() {
        let ts = TemporalValue::from_ymd_hms(2024, 1, 15, 13, 30, 0).expect("valid timestamp");
        let rendered = format_value(Some(&ts.into()), Some("YYYY-MM-DD HH12:MI PM"));
        assert_eq!(rendered, Some("2024-01-15 01:30 PM".to_string()));
    }

    #[test]
    fn it_formats_an_interval() {
        let interval = IntervalValue::new(0, 14, 0, 3, 0, 0, 0);
        let rendered = format_value(Some(&interval.into()), Some("YYYY-MM-DD"));
        assert_eq!(rendered, Some("0001-03-04".to_string()));
    }

    #[test]
    fn it_formats_a_number() {
        let number: NumericValue = "1234.5".parse().expect("valid literal");
        let rendered = format_value(Some(&number.into()), Some("#,##0.00"));
        assert_eq!(rendered, Some("1,234.50".to_string()));
    }

    #[test]
    fn it_propagates_absent_inputs() {
        assert_eq!(format_value(None, Some("YYYY")), None);
        let number: NumericValue = "1".parse().expect("valid literal");
        assert_eq!(format_value(Some(&number.into()), None), None);
    }
}
