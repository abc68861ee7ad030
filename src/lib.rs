//! limn renders a source-code file as syntax-highlighted HTML: the input
//! is reformatted canonically, tokenized, and each token classified into a
//! highlight category or a character-level substitution. Classifications
//! accumulate in sparse offset-indexed overlays which a final pass merges
//! with the text, line numbering, and the document shell. The overlays are
//! computed against stable offsets of the formatted buffer and the buffer
//! is never mutated, so no annotation can drift another one's positions.

pub mod annotating;
pub mod error;
pub mod formatting;
pub mod language;
pub mod lexing;
pub mod rendering;

use std::path::Path;

use tracing::debug;

use crate::annotating::{build_overlays, Substitutions};
use crate::error::{HighlightError, LoadingError};
use crate::formatting::Format;
use crate::language::Keywords;
use crate::lexing::Tokenize;
use crate::rendering::{render, Theme};

/// Read a file and return an owned String. Ownership passes back to the
/// caller so the formatted buffer derived from it can live for the whole
/// run.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// The two artifacts of one run: the canonically formatted text and the
/// HTML document rendered from it.
#[derive(Debug)]
pub struct Rendered {
    pub formatted: String,
    pub html: String,
}

/// Run the whole pipeline over one input: format, tokenize, classify into
/// overlays, render. Each stage completes before the next begins. The
/// formatted buffer is owned here and only ever lent out, so every offset
/// the tokenizer produced stays valid through rendering.
pub fn highlight(
    raw: &str,
    style: &str,
    formatter: &impl Format,
    tokenizer: &impl Tokenize,
    keywords: &Keywords,
    theme: &Theme,
) -> Result<Rendered, HighlightError> {
    let formatted = formatter.format(raw, style)?;
    debug!(bytes = formatted.len(), "formatted");

    let tokens = tokenizer.tokenize(&formatted);
    debug!(tokens = tokens.len(), "tokenized");

    let substitutions = Substitutions::new();
    let overlays = build_overlays(&tokens, &formatted, keywords, &substitutions, theme)?;

    let html = render(&formatted, &overlays);

    Ok(Rendered {
        formatted,
        html,
    })
}
