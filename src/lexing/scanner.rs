use crate::language::{Token, TokenKind};
use crate::lexing::Tokenize;

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

// Multi-character operators come first so the scan takes the longest match.
static OPERATORS: &[&str] = &[
    "<<=", ">>=", "<=>", "...", "->*", "::", "->", "<<", ">>", "<=", ">=",
    "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "++", "--", "+", "-", "*", "/", "%", "<", ">", "=", "!", "&", "|", "^",
    "~", "?", ".", ":",
];

/// Lexer for C-family source. Whitespace and comments are skipped, leaving
/// gaps between tokens; everything unrecognized becomes an Other token one
/// character wide so coverage of the buffer stays exact.
pub struct Scanner;

impl Tokenize for Scanner {
    fn tokenize(&self, formatted: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < formatted.len() {
            let rest = &formatted[offset..];
            let Some(c) = rest
                .chars()
                .next()
            else {
                break;
            };

            if c.is_whitespace() {
                offset += c.len_utf8();
                continue;
            }

            if rest.starts_with("//") {
                offset += rest
                    .find('\n')
                    .unwrap_or(rest.len());
                continue;
            }

            if rest.starts_with("/*") {
                offset += match rest[2..].find("*/") {
                    Some(i) => i + 4,
                    None => rest.len(),
                };
                continue;
            }

            if let Some(found) = regex!(r"^[A-Za-z_][A-Za-z0-9_]*").find(rest) {
                tokens.push(Token::new(TokenKind::Identifier, offset, found.end()));
                offset += found.end();
                continue;
            }

            if let Some(found) =
                regex!(r"^(0[xX][0-9a-fA-F]+|[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?)[uUlLfF]*")
                    .find(rest)
            {
                tokens.push(Token::new(TokenKind::Literal, offset, found.end()));
                offset += found.end();
                continue;
            }

            if c == '"' || c == '\'' {
                let length = scan_quoted(rest, c);
                tokens.push(Token::new(TokenKind::Literal, offset, length));
                offset += length;
                continue;
            }

            if let Some(operator) = OPERATORS
                .iter()
                .find(|operator| rest.starts_with(**operator))
            {
                tokens.push(Token::new(TokenKind::Operator, offset, operator.len()));
                offset += operator.len();
                continue;
            }

            if matches!(c, ';' | ',' | '(' | ')' | '{' | '}' | '[' | ']') {
                tokens.push(Token::new(TokenKind::Punctuation, offset, 1));
                offset += 1;
                continue;
            }

            tokens.push(Token::new(TokenKind::Other, offset, c.len_utf8()));
            offset += c.len_utf8();
        }

        tokens.push(Token::new(TokenKind::EndOfStream, formatted.len(), 0));
        tokens
    }
}

// Scan a string or character literal, honouring backslash escapes. An
// unterminated literal runs to the end of the line or buffer.
fn scan_quoted(rest: &str, quote: char) -> usize {
    let mut characters = rest.char_indices();
    characters.next();

    let mut escaped = false;
    for (i, c) in characters {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\n' => return i,
            c if c == quote => return i + c.len_utf8(),
            _ => {}
        }
    }
    rest.len()
}
