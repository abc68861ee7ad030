use crate::error::TokenError;
use crate::language::{Keywords, Token, TokenKind};

/// Highlight categories that receive paired markup tags in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Literal,
    Keyword,
}

// Characters that must be re-expressed as entities to keep the rendered
// document valid HTML.
static REPLACEMENTS: &[(char, &str)] = &[('<', "&lt;"), ('>', "&gt;"), ('&', "&amp;")];

/// The fixed table of characters whose raw rendering would break the HTML
/// output when they appear as source punctuation or operators. Constructed
/// once per run, like the keyword table.
#[derive(Debug, Clone)]
pub struct Substitutions {
    entries: &'static [(char, &'static str)],
}

impl Substitutions {
    pub fn new() -> Substitutions {
        Substitutions {
            entries: REPLACEMENTS,
        }
    }

    pub fn replacement(&self, c: char) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(character, _)| *character == c)
            .map(|(_, replacement)| *replacement)
    }

    fn applies(&self, text: &str) -> bool {
        text.chars()
            .any(|c| {
                self.replacement(c)
                    .is_some()
            })
    }
}

impl Default for Substitutions {
    fn default() -> Substitutions {
        Substitutions::new()
    }
}

/// Outcome of classifying one token. A token receives at most one
/// decision; substitution takes priority over annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Substitute,
    Annotate(Category),
}

/// Decide what, if anything, the renderer should do with this token.
/// EndOfStream yields no decision. A zero-length or out-of-range token is a
/// tokenizer contract violation and fails the run immediately.
pub fn classify(
    token: &Token,
    source: &str,
    keywords: &Keywords,
    substitutions: &Substitutions,
) -> Result<Option<Decision>, TokenError> {
    if token.kind == TokenKind::EndOfStream {
        return Ok(None);
    }

    if token.length == 0 {
        return Err(TokenError {
            problem: "zero length token",
            start: token.start,
            length: token.length,
        });
    }
    if token.end() > source.len() {
        return Err(TokenError {
            problem: "token range exceeds the buffer",
            start: token.start,
            length: token.length,
        });
    }

    let text = token.text(source);

    let decision = match token.kind {
        TokenKind::Operator | TokenKind::Punctuation | TokenKind::Other
            if substitutions.applies(text) =>
        {
            Some(Decision::Substitute)
        }
        TokenKind::Literal => Some(Decision::Annotate(Category::Literal)),
        TokenKind::Identifier | TokenKind::Keyword if keywords.is_reserved(text) => {
            Some(Decision::Annotate(Category::Keyword))
        }
        _ => None,
    };

    Ok(decision)
}

#[cfg(test)]
mod check {
    use super::*;

    fn classify_one(content: &str, token: Token) -> Option<Decision> {
        let keywords = Keywords::new();
        let substitutions = Substitutions::new();
        classify(&token, content, &keywords, &substitutions).unwrap()
    }

    #[test]
    fn keywords_annotated() {
        let decision = classify_one("int x", Token::new(TokenKind::Identifier, 0, 3));

        assert_eq!(decision, Some(Decision::Annotate(Category::Keyword)));
    }

    #[test]
    fn plain_identifiers_pass_through() {
        let decision = classify_one("int x", Token::new(TokenKind::Identifier, 4, 1));

        assert_eq!(decision, None);
    }

    #[test]
    fn literals_annotated() {
        let decision = classify_one("42", Token::new(TokenKind::Literal, 0, 2));

        assert_eq!(decision, Some(Decision::Annotate(Category::Literal)));
    }

    #[test]
    fn angle_bracket_substituted() {
        let decision = classify_one("a<b", Token::new(TokenKind::Operator, 1, 1));

        assert_eq!(decision, Some(Decision::Substitute));
    }

    #[test]
    fn substitution_takes_priority() {
        // a shift operator contains '<' so it must be substituted, never
        // left raw in the output
        let decision = classify_one("a<<b", Token::new(TokenKind::Operator, 1, 2));

        assert_eq!(decision, Some(Decision::Substitute));
    }

    #[test]
    fn harmless_operators_pass_through() {
        let decision = classify_one("a=b", Token::new(TokenKind::Operator, 1, 1));

        assert_eq!(decision, None);
    }

    #[test]
    fn end_of_stream_never_classified() {
        let decision = classify_one("x", Token::new(TokenKind::EndOfStream, 1, 0));

        assert_eq!(decision, None);
    }

    #[test]
    fn zero_length_token_rejected() {
        let keywords = Keywords::new();
        let substitutions = Substitutions::new();
        let token = Token::new(TokenKind::Identifier, 0, 0);

        let result = classify(&token, "x", &keywords, &substitutions);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_token_rejected() {
        let keywords = Keywords::new();
        let substitutions = Substitutions::new();
        let token = Token::new(TokenKind::Identifier, 0, 9);

        let result = classify(&token, "x", &keywords, &substitutions);
        assert!(result.is_err());
    }
}
