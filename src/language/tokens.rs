/// Lexical category assigned to a token by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal,
    Keyword,
    Identifier,
    Punctuation,
    Operator,
    EndOfStream,
    Other,
}

/// A lexical unit and its byte range within the formatted text. Tokens are
/// produced in increasing start order and never overlap; whitespace and
/// comments appear as gaps between them rather than as tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub length: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, length: usize) -> Token {
        Token {
            kind,
            start,
            length,
        }
    }

    /// One past the last byte covered by this token.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// The slice of source text this token covers. Offsets are only
    /// meaningful against the exact buffer the tokenizer scanned.
    pub fn text<'i>(&self, source: &'i str) -> &'i str {
        &source[self.start..self.start + self.length]
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn token_range() {
        let token = Token::new(TokenKind::Identifier, 0, 3);

        assert_eq!(token.end(), 3);
        assert_eq!(token.text("int x = 1;"), "int");
    }
}
