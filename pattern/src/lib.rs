//! FILENAME: pattern/src/lib.rs
//! PURPOSE: Library root for the format-pattern tokenizer.
//! CONTEXT: This crate turns a raw pattern string into the segment list
//! the rendering engine walks. It knows nothing about values or locales.
//!
//! PIPELINE: Pattern String --> Tokenizer --> Segments --> Renderers
//!
//! SUPPORTED GRAMMAR:
//! - Date/time directives: YYYY YY MM MONTH MON DD DDD DAY DY WW Q
//!   HH24 HH12 HH MI SS MS US AM PM A.M. P.M. BC AD B.C. A.D., with an
//!   FM prefix for unpadded rendering. Matching is case-insensitive and
//!   greedy; the matched text's case is recorded for name rendering.
//! - Numeric placeholders: 0 # . , (first `.` only; the rest is literal)
//! - Anything else is literal text, copied to the output verbatim.

pub mod token;
pub mod tokenizer;


// Re-export commonly used types for convenience
pub use token::{CaseStyle, Directive, DirectiveKind, NumericSegment, Segment};
pub use tokenizer::{tokenize, tokenize_numeric};
