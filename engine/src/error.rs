//! FILENAME: engine/src/error.rs

use thiserror::Error;

/// Errors raised while constructing values. Rendering itself never
/// fails: absent inputs give an absent result and unknown pattern text
/// falls through as literals.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("invalid numeric literal: {0}")]
    InvalidNumeric(String),

    #[error("not a finite number: {0}")]
    NonFinite(f64),

    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("timestamp out of range: {0} ms since the epoch")]
    TimestampOutOfRange(i64),
}
