//! FILENAME: pattern/src/token.rs
//! PURPOSE: Segment and directive definitions for format patterns.
//! CONTEXT: Segments are the atomic units produced by the tokenizer and
//! consumed by the renderers. A pattern is either rendered against a
//! date/time value (temporal or interval) or against a numeric value;
//! the two families use disjoint token vocabularies, so they get
//! separate segment types.

/// Letter-case class of a matched directive, taken from the pattern text.
///
/// Name-producing directives follow this case when rendered:
/// `DAY` -> `THURSDAY`, `Day` -> `Thursday`, `day` -> `thursday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Upper,
    Capitalized,
    Lower,
}

impl CaseStyle {
    /// Classify a matched token by its first letter and the rest.
    pub fn of(text: &str) -> CaseStyle {
        let mut letters = text.chars().filter(|c| c.is_alphabetic());
        match letters.next() {
            Some(first) if first.is_uppercase() => {
                if letters.all(|c| c.is_uppercase()) {
                    CaseStyle::Upper
                } else {
                    CaseStyle::Capitalized
                }
            }
            _ => CaseStyle::Lower,
        }
    }

    /// Fold a display name to this case class.
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseStyle::Upper => name.to_uppercase(),
            CaseStyle::Lower => name.to_lowercase(),
            CaseStyle::Capitalized => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Fields a date/time directive can ask for.
///
/// Temporal and interval rendering share this vocabulary; they differ
/// only in how a kind resolves to a field of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `YYYY` — 4-digit year
    Year4,
    /// `YY` — 2-digit year
    Year2,
    /// `MM` — month number
    Month,
    /// `MONTH` — full month name
    MonthNameFull,
    /// `MON` — abbreviated month name
    MonthNameAbbrev,
    /// `DD` — day of month
    DayOfMonth,
    /// `DDD` — day of year
    DayOfYear,
    /// `DAY` — full weekday name
    WeekdayNameFull,
    /// `DY` — abbreviated weekday name
    WeekdayNameAbbrev,
    /// `WW` — week of year
    WeekOfYear,
    /// `Q` — quarter
    Quarter,
    /// `HH24` — 24-hour hour
    Hour24,
    /// `HH12` or `HH` — 12-hour hour
    Hour12,
    /// `MI` — minute
    Minute,
    /// `SS` — second
    Second,
    /// `MS` — millisecond
    Millisecond,
    /// `US` — microsecond
    Microsecond,
    /// `AM`/`PM`, or `A.M.`/`P.M.` in the dotted spelling
    Meridiem { dotted: bool },
    /// `BC`/`AD`, or `B.C.`/`A.D.` in the dotted spelling
    Era { dotted: bool },
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            DirectiveKind::Year4 => "YYYY",
            DirectiveKind::Year2 => "YY",
            DirectiveKind::Month => "MM",
            DirectiveKind::MonthNameFull => "MONTH",
            DirectiveKind::MonthNameAbbrev => "MON",
            DirectiveKind::DayOfMonth => "DD",
            DirectiveKind::DayOfYear => "DDD",
            DirectiveKind::WeekdayNameFull => "DAY",
            DirectiveKind::WeekdayNameAbbrev => "DY",
            DirectiveKind::WeekOfYear => "WW",
            DirectiveKind::Quarter => "Q",
            DirectiveKind::Hour24 => "HH24",
            DirectiveKind::Hour12 => "HH12",
            DirectiveKind::Minute => "MI",
            DirectiveKind::Second => "SS",
            DirectiveKind::Millisecond => "MS",
            DirectiveKind::Microsecond => "US",
            DirectiveKind::Meridiem { dotted: true } => "A.M.",
            DirectiveKind::Meridiem { dotted: false } => "AM",
            DirectiveKind::Era { dotted: true } => "A.D.",
            DirectiveKind::Era { dotted: false } => "AD",
        };
        write!(f, "{}", spelling)
    }
}

/// A directive with the presentation details captured at match time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Letter case of the matched pattern text.
    pub case: CaseStyle,
    /// False when an `FM` prefix asked for an unpadded rendering.
    pub padded: bool,
}

/// One piece of a tokenized date/time pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Verbatim text copied to the output.
    Literal(String),
    /// A recognized directive.
    Directive(Directive),
}

/// One piece of a tokenized numeric pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericSegment {
    /// `0` — always renders a digit, zero-padding past the value's digits.
    DigitZero,
    /// `#` — renders a digit only when one is present, never a pad.
    DigitHash,
    /// `.` — the integer/fraction boundary. Only the first `.` of a
    /// pattern is the boundary; later ones are literal text.
    DecimalPoint,
    /// `,` — thousands grouping in the rendered integer part.
    GroupSeparator,
    /// Verbatim text.
    Literal(String),
}
