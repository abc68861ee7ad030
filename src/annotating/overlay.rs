use std::collections::BTreeMap;

use tracing::debug;

use crate::annotating::{classify, Decision, Substitutions};
use crate::error::TokenError;
use crate::language::{Keywords, Token, TokenKind};
use crate::rendering::Theme;

/// Markup and replacement text accumulated against byte offsets of the
/// formatted text. The two maps are distinct so a markup boundary and a
/// character substitution at the same offset never collide. The builder
/// owns and mutates these during the classification pass; the renderer
/// only ever borrows them.
#[derive(Debug, Default)]
pub struct Overlays {
    pub markup: BTreeMap<usize, String>,
    pub substitutions: BTreeMap<usize, String>,
}

impl Overlays {
    fn annotate(&mut self, start: usize, end: usize, open: &str, close: &str) {
        self.markup
            .entry(start)
            .or_default()
            .push_str(open);
        self.markup
            .entry(end)
            .or_default()
            .push_str(close);
    }

    fn substitute(&mut self, offset: usize, replacement: &str) {
        self.substitutions
            .insert(offset, replacement.to_string());
    }
}

/// Single forward pass over the ordered token stream, accumulating the
/// overlays the renderer will merge with the text. Tokens arrive in offset
/// order and never overlap, so a span closing at some offset is always
/// appended before a span opening there; markup at shared boundaries
/// therefore stays well nested without any reordering step.
pub fn build_overlays(
    tokens: &[Token],
    source: &str,
    keywords: &Keywords,
    substitutions: &Substitutions,
    theme: &Theme,
) -> Result<Overlays, TokenError> {
    let mut overlays = Overlays::default();

    for token in tokens {
        if token.kind == TokenKind::EndOfStream {
            break;
        }

        match classify(token, source, keywords, substitutions)? {
            Some(Decision::Annotate(category)) => {
                let (open, close) = theme.tags(category);
                overlays.annotate(token.start, token.end(), open, close);
            }
            Some(Decision::Substitute) => {
                // replace only the characters that need escaping; the rest
                // of a multi-character operator keeps its original bytes
                let text = token.text(source);
                for (i, c) in text.char_indices() {
                    if let Some(replacement) = substitutions.replacement(c) {
                        overlays.substitute(token.start + i, replacement);
                    }
                }
            }
            None => {}
        }
    }

    debug!(
        markup = overlays
            .markup
            .len(),
        substitutions = overlays
            .substitutions
            .len(),
        "overlays built"
    );

    Ok(overlays)
}
