//! FILENAME: engine/src/formatter.rs
//! PURPOSE: The formatting façade: null propagation, pattern caching,
//! and dispatch to the renderer for the value's domain.
//! CONTEXT: This is the only entry point the enclosing engine calls. It
//! is a pure function of (value, pattern, locale names): no mutation of
//! its inputs, no I/O, safe to call from any number of threads.

use std::sync::Arc;

use dashmap::DashMap;
use log::trace;
use once_cell::sync::Lazy;
use pattern::{tokenize, tokenize_numeric, NumericSegment, Segment};

use crate::datetime::{render_interval, render_temporal};
use crate::locale::{EnglishNames, LocaleNames};
use crate::numeric::render_numeric;
use crate::value::TypedValue;

/// Compiled patterns keyed by their source text.
///
/// Patterns repeat across the rows of one formatting pass, so compiling
/// once per distinct text pays for itself. The date/time and numeric
/// grammars are disjoint, hence two maps; `entry` gives at-most-once
/// compute per key when callers share the cache.
#[derive(Debug, Default)]
pub struct PatternCache {
    datetime: DashMap<String, Arc<[Segment]>>,
    numeric: DashMap<String, Arc<[NumericSegment]>>,
}

impl PatternCache {
    pub fn compile_datetime(&self, text: &str) -> Arc<[Segment]> {
        if let Some(found) = self.datetime.get(text) {
            return Arc::clone(&found);
        }
        Arc::clone(
            self.datetime
                .entry(text.to_string())
                .or_insert_with(|| {
                    trace!("compiling date/time pattern {:?}", text);
                    tokenize(text).into()
                })
                .value(),
        )
    }

    pub fn compile_numeric(&self, text: &str) -> Arc<[NumericSegment]> {
        if let Some(found) = self.numeric.get(text) {
            return Arc::clone(&found);
        }
        Arc::clone(
            self.numeric
                .entry(text.to_string())
                .or_insert_with(|| {
                    trace!("compiling numeric pattern {:?}", text);
                    tokenize_numeric(text).into()
                })
                .value(),
        )
    }
}

/// The formatting façade. Holds the locale-name provider and the
/// compiled-pattern cache; share one instance across a formatting pass.
#[derive(Debug, Default)]
pub struct Formatter<N = EnglishNames> {
    names: N,
    cache: PatternCache,
}

impl Formatter<EnglishNames> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: LocaleNames> Formatter<N> {
    /// Build a formatter over a specific locale-name provider.
    pub fn with_names(names: N) -> Self {
        Formatter {
            names,
            cache: PatternCache::default(),
        }
    }

    /// Render `value` per `pattern`.
    ///
    /// An absent value or an absent pattern gives an absent result,
    /// before any tokenization. An empty pattern is present, not absent:
    /// it renders zero segments — which for the numeric domain means
    /// the default full-precision representation.
    pub fn format(&self, value: Option<&TypedValue>, pattern: Option<&str>) -> Option<String> {
        let (value, pattern) = match (value, pattern) {
            (Some(value), Some(pattern)) => (value, pattern),
            _ => return None,
        };

        let rendered = match value {
            TypedValue::Temporal(timestamp) => {
                render_temporal(&self.cache.compile_datetime(pattern), timestamp, &self.names)
            }
            TypedValue::Interval(interval) => {
                render_interval(&self.cache.compile_datetime(pattern), interval, &self.names)
            }
            TypedValue::Numeric(number) => {
                render_numeric(&self.cache.compile_numeric(pattern), number)
            }
        };
        Some(rendered)
    }
}

/// One-shot convenience over a process-wide formatter with English
/// names, for callers that do not manage a `Formatter` of their own.
pub fn format_value(value: Option<&TypedValue>, pattern: Option<&str>) -> Option<String> {
    static SHARED: Lazy<Formatter> = Lazy::new(Formatter::new);
    SHARED.format(value, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::NumericValue;
    use crate::value::{IntervalValue, TemporalValue};

    fn timestamp() -> TypedValue {
        TemporalValue::from_ymd_hms(1970, 1, 1, 17, 31, 12)
            .expect("valid timestamp")
            .into()
    }

    fn number(text: &str) -> TypedValue {
        text.parse::<NumericValue>().expect("valid literal").into()
    }

    #[test]
    fn test_absent_value_or_pattern_absorbs() {
        let formatter = Formatter::new();
        assert_eq!(formatter.format(None, Some("YYYY")), None);
        assert_eq!(formatter.format(Some(&timestamp()), None), None);
        assert_eq!(formatter.format(None, None), None);
        assert_eq!(formatter.format(Some(&number("-125.8")), None), None);
    }

    #[test]
    fn test_empty_pattern_is_present_not_absent() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter.format(Some(&number("-125.8")), Some("")),
            Some("-125.8".to_string())
        );
        assert_eq!(
            formatter.format(Some(&timestamp()), Some("")),
            Some(String::new())
        );
    }

    #[test]
    fn test_dispatch_selects_renderer_by_domain() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter.format(Some(&timestamp()), Some("HH24:MI")),
            Some("17:31".to_string())
        );
        assert_eq!(
            formatter.format(
                Some(&IntervalValue::new(0, 0, 0, 0, 17, 31, 0).into()),
                Some("HH24:MI")
            ),
            Some("17:31".to_string())
        );
        assert_eq!(
            formatter.format(Some(&number("12345.678")), Some("###,###.##")),
            Some("12,345.68".to_string())
        );
    }

    #[test]
    fn test_cache_reuses_compiled_patterns() {
        let formatter = Formatter::new();
        for _ in 0..3 {
            formatter.format(Some(&timestamp()), Some("YYYY-MM-DD"));
            formatter.format(Some(&number("1")), Some("#,##0"));
        }
        assert_eq!(formatter.cache.datetime.len(), 1);
        assert_eq!(formatter.cache.numeric.len(), 1);
    }

    #[test]
    fn test_shared_convenience_formatter() {
        assert_eq!(
            format_value(Some(&number("125.6")), Some("0000")),
            Some("0126".to_string())
        );
        assert_eq!(format_value(None, Some("0000")), None);
    }
}
