//! FILENAME: engine/src/datetime.rs
//! PURPOSE: Renders date/time patterns for timestamps and intervals.
//! CONTEXT: Both domains share one directive vocabulary and one segment
//! walk; they differ only in how a directive resolves to a field of the
//! value. Each domain supplies a `FieldSource` strategy below. A
//! directive that resolves to nothing emits nothing — that is the
//! documented fallback for calendar-anchored tokens applied to
//! intervals, which have no weekday, month name, meridiem, or era.

use pattern::{Directive, DirectiveKind, Segment};

use crate::locale::LocaleNames;
use crate::value::{IntervalValue, NormalizedInterval, TemporalValue};

/// A numeric calendar field plus the zero-padded width its token implies.
struct NumericField {
    value: i64,
    width: usize,
}

impl NumericField {
    fn new(value: i64, width: usize) -> Self {
        NumericField { value, width }
    }
}

/// Resolves directives against one value domain.
trait FieldSource {
    /// The numeric field behind a directive, or None when the directive
    /// has no meaning for this domain.
    fn numeric_field(&self, kind: DirectiveKind) -> Option<NumericField>;

    /// Weekday index (0 = Sunday) when the domain has one.
    fn weekday_index(&self) -> Option<u32>;

    /// Month number (1-12) for name lookups, when the domain has one.
    fn month_number(&self) -> Option<u32>;

    /// Half of the day, when the domain has a wall-clock position.
    fn is_pm(&self) -> Option<bool>;

    /// Era, when the domain is anchored to a calendar.
    fn is_bc(&self) -> Option<bool>;
}

/// Render a tokenized pattern against a timestamp.
pub fn render_temporal(
    segments: &[Segment],
    value: &TemporalValue,
    names: &dyn LocaleNames,
) -> String {
    render(segments, &TemporalFields(value), names)
}

/// Render a tokenized pattern against an interval. The value is
/// normalized first (weeks into days, month dozens into years).
pub fn render_interval(
    segments: &[Segment],
    value: &IntervalValue,
    names: &dyn LocaleNames,
) -> String {
    render(segments, &IntervalFields(value.normalized()), names)
}

fn render(segments: &[Segment], fields: &dyn FieldSource, names: &dyn LocaleNames) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Directive(directive) => render_directive(directive, fields, names, &mut out),
        }
    }
    out
}

fn render_directive(
    directive: &Directive,
    fields: &dyn FieldSource,
    names: &dyn LocaleNames,
    out: &mut String,
) {
    match directive.kind {
        DirectiveKind::WeekdayNameFull | DirectiveKind::WeekdayNameAbbrev => {
            if let Some(index) = fields.weekday_index() {
                let abbreviated = directive.kind == DirectiveKind::WeekdayNameAbbrev;
                let name = names.weekday_name(index, abbreviated);
                out.push_str(&directive.case.apply(name));
            }
        }
        DirectiveKind::MonthNameFull | DirectiveKind::MonthNameAbbrev => {
            if let Some(month) = fields.month_number() {
                let abbreviated = directive.kind == DirectiveKind::MonthNameAbbrev;
                let name = names.month_name(month, abbreviated);
                out.push_str(&directive.case.apply(name));
            }
        }
        DirectiveKind::Meridiem { dotted } => {
            if let Some(is_pm) = fields.is_pm() {
                push_marker(out, names.meridiem(is_pm), dotted, directive);
            }
        }
        DirectiveKind::Era { dotted } => {
            if let Some(is_bc) = fields.is_bc() {
                push_marker(out, if is_bc { "BC" } else { "AD" }, dotted, directive);
            }
        }
        _ => {
            if let Some(field) = fields.numeric_field(directive.kind) {
                if directive.padded {
                    out.push_str(&format!("{:0width$}", field.value, width = field.width));
                } else {
                    out.push_str(&field.value.to_string());
                }
            }
        }
    }
}

/// Emit a meridiem/era marker, dotted when the pattern spelled it
/// dotted ("AM" -> "A.M."), folded to the pattern's case.
fn push_marker(out: &mut String, marker: &str, dotted: bool, directive: &Directive) {
    if dotted {
        let mut text = String::with_capacity(marker.len() * 2);
        for ch in marker.chars() {
            text.push(ch);
            text.push('.');
        }
        out.push_str(&directive.case.apply(&text));
    } else {
        out.push_str(&directive.case.apply(marker));
    }
}

// ============================================================================
// FIELD RESOLUTION — TEMPORAL
// ============================================================================

struct TemporalFields<'a>(&'a TemporalValue);

impl FieldSource for TemporalFields<'_> {
    fn numeric_field(&self, kind: DirectiveKind) -> Option<NumericField> {
        let value = self.0;
        let field = match kind {
            DirectiveKind::Year4 => NumericField::new(value.display_year(), 4),
            DirectiveKind::Year2 => NumericField::new(value.display_year() % 100, 2),
            DirectiveKind::Month => NumericField::new(value.month as i64, 2),
            DirectiveKind::DayOfMonth => NumericField::new(value.day as i64, 2),
            DirectiveKind::DayOfYear => NumericField::new(value.ordinal as i64, 3),
            DirectiveKind::WeekOfYear => NumericField::new(value.week() as i64, 2),
            DirectiveKind::Quarter => NumericField::new(value.quarter() as i64, 1),
            DirectiveKind::Hour24 => NumericField::new(value.hour as i64, 2),
            DirectiveKind::Hour12 => NumericField::new(value.hour12() as i64, 2),
            DirectiveKind::Minute => NumericField::new(value.minute as i64, 2),
            DirectiveKind::Second => NumericField::new(value.second as i64, 2),
            DirectiveKind::Millisecond => NumericField::new(value.millisecond() as i64, 3),
            DirectiveKind::Microsecond => NumericField::new(value.microsecond as i64, 6),
            _ => return None,
        };
        Some(field)
    }

    fn weekday_index(&self) -> Option<u32> {
        Some(self.0.weekday)
    }

    fn month_number(&self) -> Option<u32> {
        Some(self.0.month)
    }

    fn is_pm(&self) -> Option<bool> {
        Some(self.0.is_pm())
    }

    fn is_bc(&self) -> Option<bool> {
        Some(self.0.is_bc())
    }
}

// ============================================================================
// FIELD RESOLUTION — INTERVAL
// ============================================================================

/// Interval magnitudes render as positions on a virtual calendar origin
/// of year 0, month 1, day 1: the month and day fields are 1-based
/// positions, the rest are raw magnitudes. Nothing is clamped — an
/// interval's hour field is not a wall-clock position, and its day
/// field may exceed any real month's length.
struct IntervalFields(NormalizedInterval);

impl FieldSource for IntervalFields {
    fn numeric_field(&self, kind: DirectiveKind) -> Option<NumericField> {
        let value = &self.0;
        let field = match kind {
            DirectiveKind::Year4 => NumericField::new(value.years, 4),
            DirectiveKind::Year2 => NumericField::new(value.years % 100, 2),
            DirectiveKind::Month => NumericField::new(value.months + 1, 2),
            DirectiveKind::DayOfMonth => NumericField::new(value.days + 1, 2),
            DirectiveKind::Hour24 | DirectiveKind::Hour12 => NumericField::new(value.hours, 2),
            DirectiveKind::Minute => NumericField::new(value.minutes, 2),
            DirectiveKind::Second => NumericField::new(value.seconds, 2),
            // Durations carry no sub-second component.
            DirectiveKind::Millisecond => NumericField::new(0, 3),
            DirectiveKind::Microsecond => NumericField::new(0, 6),
            _ => return None,
        };
        Some(field)
    }

    fn weekday_index(&self) -> Option<u32> {
        None
    }

    fn month_number(&self) -> Option<u32> {
        None
    }

    fn is_pm(&self) -> Option<bool> {
        None
    }

    fn is_bc(&self) -> Option<bool> {
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================
