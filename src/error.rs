//! Error types
//!
//! Range and item errors are a deterministic function of their input: the
//! caller handed over a value that can never be valid. Nothing is clamped.

use std::fmt;

use thiserror::Error;

/// Which collection of a [`StyledText`](crate::rich::StyledText) a range belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Span,
    Paragraph,
    Annotation,
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangeKind::Span => "span style",
            RangeKind::Paragraph => "paragraph style",
            RangeKind::Annotation => "annotation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaperError {
    /// A range was built with `start > end`
    #[error("invalid range ({start} > {end})")]
    InvalidRange { start: usize, end: usize },

    /// A styled text was built with a range reaching past the text
    #[error("{kind} is out of boundary (style={range}, text length={text_len})")]
    RangeOutOfBounds {
        kind: RangeKind,
        /// Readable form of the offending range, e.g. `(1..3]`
        range: String,
        text_len: usize,
    },

    /// A note body index that does not hold the expected kind of item
    #[error("no {expected} item at body index {index}")]
    NoSuchItem { index: usize, expected: &'static str },

    /// Configuration could not be read or written
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PaperError>;
