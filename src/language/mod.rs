// Types representing the lexical structure of the source language

mod keywords;
mod tokens;

// Re-export all public symbols
pub use keywords::*;
pub use tokens::*;
