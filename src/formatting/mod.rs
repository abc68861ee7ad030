//! Canonical reformatting of raw source text

mod canonical;

pub use canonical::*;

use crate::error::FormatError;

/// Capability interface for the code formatter. A formatter is a
/// deterministic, single-shot text to text function: no streaming, no
/// partial results. Formatting must be idempotent, so reformatting its own
/// output changes nothing. It fails when the style name is unrecognized or
/// the input cannot be parsed well enough to reformat.
pub trait Format {
    fn format(&self, raw: &str, style: &str) -> Result<String, FormatError>;
}
