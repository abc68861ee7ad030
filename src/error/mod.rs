//! Error types for the highlighting pipeline

use std::{fmt, path::Path};

/// Failure to read the input file. Surfaced immediately; nothing here is
/// retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// The formatter rejected the input: either the requested style preset is
/// unrecognized, or the text cannot be parsed well enough to reformat. The
/// pipeline aborts before tokenization when this occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// A token violated the offset or length invariants of the stream. This is
/// a tokenizer contract violation, not bad input, so it is fatal for the
/// run rather than recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    pub problem: &'static str,
    pub start: usize,
    pub length: usize,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed token at offset {}: {}",
            self.start, self.problem
        )
    }
}

/// Sum of the failures the pipeline itself can produce, so the driver can
/// propagate any stage's error with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    Format(FormatError),
    Token(TokenError),
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightError::Format(error) => write!(f, "{}", error),
            HighlightError::Token(error) => write!(f, "{}", error),
        }
    }
}

impl From<FormatError> for HighlightError {
    fn from(error: FormatError) -> HighlightError {
        HighlightError::Format(error)
    }
}

impl From<TokenError> for HighlightError {
    fn from(error: TokenError) -> HighlightError {
        HighlightError::Token(error)
    }
}
