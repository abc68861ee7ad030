//! Tokenizing formatted source text

mod scanner;

pub use scanner::*;

use crate::language::Token;

/// Capability interface for the tokenizer. Implementations are
/// deterministic and single-shot: the returned stream is ordered by
/// increasing start offset, tokens never overlap, and the stream always
/// terminates with an EndOfStream token. Tokenizing never fails for
/// well-formed text; a malformed stream is caught later by the classifier.
pub trait Tokenize {
    fn tokenize(&self, formatted: &str) -> Vec<Token>;
}
