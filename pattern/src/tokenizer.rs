//! FILENAME: pattern/src/tokenizer.rs
//! PURPOSE: Scans a raw pattern string into an ordered list of segments.
//! CONTEXT: This is the first stage of the formatting pipeline. Matching
//! is greedy (longest directive first) and case-insensitive; the matched
//! text's original case is recorded on the segment so renderers can
//! decide capitalization. Characters that match no directive accumulate
//! into literal segments verbatim — there is no such thing as an invalid
//! pattern, and an empty pattern is simply zero segments.

use crate::token::{CaseStyle, Directive, DirectiveKind, NumericSegment, Segment};

/// Date/time token table, longest spelling first so that greedy matching
/// picks `HH12` over `HH`, `MONTH` over `MON`, `DDD` over `DD`.
const DATETIME_TOKENS: &[(&str, DirectiveKind)] = &[
    ("MONTH", DirectiveKind::MonthNameFull),
    ("HH24", DirectiveKind::Hour24),
    ("HH12", DirectiveKind::Hour12),
    ("YYYY", DirectiveKind::Year4),
    ("A.M.", DirectiveKind::Meridiem { dotted: true }),
    ("P.M.", DirectiveKind::Meridiem { dotted: true }),
    ("B.C.", DirectiveKind::Era { dotted: true }),
    ("A.D.", DirectiveKind::Era { dotted: true }),
    ("MON", DirectiveKind::MonthNameAbbrev),
    ("DAY", DirectiveKind::WeekdayNameFull),
    ("DDD", DirectiveKind::DayOfYear),
    ("YY", DirectiveKind::Year2),
    ("MM", DirectiveKind::Month),
    ("DD", DirectiveKind::DayOfMonth),
    ("DY", DirectiveKind::WeekdayNameAbbrev),
    ("WW", DirectiveKind::WeekOfYear),
    ("HH", DirectiveKind::Hour12),
    ("MI", DirectiveKind::Minute),
    ("SS", DirectiveKind::Second),
    ("MS", DirectiveKind::Millisecond),
    ("US", DirectiveKind::Microsecond),
    ("AM", DirectiveKind::Meridiem { dotted: false }),
    ("PM", DirectiveKind::Meridiem { dotted: false }),
    ("BC", DirectiveKind::Era { dotted: false }),
    ("AD", DirectiveKind::Era { dotted: false }),
    ("Q", DirectiveKind::Quarter),
];

/// The fill-mode prefix: the directive right after it renders unpadded.
const FILL_MODE: &str = "FM";

/// Tokenize a date/time pattern (shared by temporal and interval rendering).
pub fn tokenize(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;
    let mut fill_mode = false;

    while !rest.is_empty() {
        if matches_ignore_case(rest, FILL_MODE) {
            flush_literal(&mut segments, &mut literal);
            fill_mode = true;
            rest = &rest[FILL_MODE.len()..];
            continue;
        }

        if let Some((kind, matched)) = match_directive(rest) {
            flush_literal(&mut segments, &mut literal);
            segments.push(Segment::Directive(Directive {
                kind,
                case: CaseStyle::of(matched),
                padded: !fill_mode,
            }));
            fill_mode = false;
            rest = &rest[matched.len()..];
            continue;
        }

        // Not a directive: one character of literal text.
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            literal.push(ch);
        }
        rest = chars.as_str();
    }

    flush_literal(&mut segments, &mut literal);
    segments
}

/// Tokenize a numeric pattern. Only the first `.` becomes the decimal
/// marker; any later `.` falls through to literal text.
pub fn tokenize_numeric(pattern: &str) -> Vec<NumericSegment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut seen_decimal = false;

    for ch in pattern.chars() {
        let segment = match ch {
            '0' => Some(NumericSegment::DigitZero),
            '#' => Some(NumericSegment::DigitHash),
            ',' => Some(NumericSegment::GroupSeparator),
            '.' if !seen_decimal => {
                seen_decimal = true;
                Some(NumericSegment::DecimalPoint)
            }
            _ => None,
        };

        match segment {
            Some(segment) => {
                flush_numeric_literal(&mut segments, &mut literal);
                segments.push(segment);
            }
            None => literal.push(ch),
        }
    }

    flush_numeric_literal(&mut segments, &mut literal);
    segments
}

/// Try every known directive spelling at the head of `rest`.
fn match_directive(rest: &str) -> Option<(DirectiveKind, &str)> {
    for (spelling, kind) in DATETIME_TOKENS {
        if matches_ignore_case(rest, spelling) {
            return Some((*kind, &rest[..spelling.len()]));
        }
    }
    None
}

/// ASCII case-insensitive prefix check that never splits a multi-byte
/// character (directive spellings are all ASCII).
fn matches_ignore_case(rest: &str, spelling: &str) -> bool {
    match rest.get(..spelling.len()) {
        Some(head) => head.eq_ignore_ascii_case(spelling),
        None => false,
    }
}

fn flush_literal(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

fn flush_numeric_literal(segments: &mut Vec<NumericSegment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(NumericSegment::Literal(std::mem::take(literal)));
    }
}
