//! FILENAME: engine/src/value.rs
//! PURPOSE: Defines the typed values the formatting engine accepts.
//! CONTEXT: This file contains the `TypedValue` domain enum and the two
//! date/time value types. Values arrive already normalized to the
//! calendar fields to be rendered — no timezone conversion happens here.
//! All values are created per call, consumed read-only, and discarded.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::NumericValue;
use crate::error::ValueError;

/// A typed value accepted by the formatting façade, one variant per
/// renderer domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    Temporal(TemporalValue),
    Interval(IntervalValue),
    Numeric(NumericValue),
}

impl From<TemporalValue> for TypedValue {
    fn from(value: TemporalValue) -> Self {
        TypedValue::Temporal(value)
    }
}

impl From<IntervalValue> for TypedValue {
    fn from(value: IntervalValue) -> Self {
        TypedValue::Interval(value)
    }
}

impl From<NumericValue> for TypedValue {
    fn from(value: NumericValue) -> Self {
        TypedValue::Numeric(value)
    }
}

/// A timestamp decomposed into the calendar fields the renderer reads.
///
/// The weekday and ordinal are derived at construction so the renderer
/// never has to do calendar math of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalValue {
    /// Astronomical year: 0 is 1 BC, -1 is 2 BC.
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    /// 0-23
    pub hour: u32,
    /// 0-59
    pub minute: u32,
    /// 0-59
    pub second: u32,
    /// Sub-second fraction, 0..1_000_000.
    pub microsecond: u32,
    /// 0 = Sunday through 6 = Saturday.
    pub weekday: u32,
    /// Day of year, 1-366.
    pub ordinal: u32,
}

impl TemporalValue {
    /// Build from calendar fields; the weekday and ordinal are derived.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, ValueError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ValueError::InvalidDate { year, month, day })?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ValueError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(TemporalValue {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond: 0,
            weekday: date.weekday().num_days_from_sunday(),
            ordinal: date.ordinal(),
        })
    }

    /// Attach a sub-second microsecond component.
    pub fn with_microsecond(mut self, microsecond: u32) -> Self {
        self.microsecond = microsecond % 1_000_000;
        self
    }

    /// Decompose an epoch instant (milliseconds since 1970-01-01T00:00:00Z).
    pub fn from_epoch_millis(millis: i64) -> Result<Self, ValueError> {
        let dt: DateTime<Utc> = DateTime::from_timestamp_millis(millis)
            .ok_or(ValueError::TimestampOutOfRange(millis))?;
        Ok(TemporalValue {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            microsecond: dt.timestamp_subsec_micros(),
            weekday: dt.weekday().num_days_from_sunday(),
            ordinal: dt.ordinal(),
        })
    }

    /// 12-hour clock hour, 1-12.
    pub fn hour12(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    /// True for years <= 0 (the astronomical count puts 1 BC at year 0).
    pub fn is_bc(&self) -> bool {
        self.year <= 0
    }

    /// The year as displayed next to an era marker: year 0 shows as 1 BC.
    pub fn display_year(&self) -> i64 {
        if self.year > 0 {
            self.year as i64
        } else {
            1 - self.year as i64
        }
    }

    pub fn millisecond(&self) -> u32 {
        self.microsecond / 1000
    }

    /// 1-4
    pub fn quarter(&self) -> u32 {
        (self.month - 1) / 3 + 1
    }

    /// Week of year counted in plain 7-day blocks from January 1st.
    pub fn week(&self) -> u32 {
        (self.ordinal - 1) / 7 + 1
    }
}

/// A duration decomposed into additive magnitudes with no anchor date.
/// Fields are not calendar positions; any of them may exceed its
/// wall-clock range and none of them is required to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntervalValue {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl IntervalValue {
    pub fn new(
        years: i64,
        months: i64,
        weeks: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Self {
        IntervalValue {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Fold weeks into days and whole dozens of months into years.
    ///
    /// Days never carry into months: without an anchor date there is no
    /// month length to carry against, so the day magnitude may exceed
    /// what any real month holds. Hours, minutes and seconds stay raw.
    pub fn normalized(&self) -> NormalizedInterval {
        let total_months = self.years * 12 + self.months;
        NormalizedInterval {
            years: total_months.div_euclid(12),
            months: total_months.rem_euclid(12),
            days: self.days + self.weeks * 7,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }
}

/// An interval after normalization; what the renderer actually reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInterval {
    pub years: i64,
    /// 0-11 after the carry into years.
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}
