use std::collections::HashSet;

// The reserved words of the C-family grammar the scanner understands.
static RESERVED: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const",
    "constexpr", "continue", "default", "delete", "do", "double", "else",
    "enum", "explicit", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "nullptr",
    "operator", "private", "protected", "public", "register", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "template",
    "this", "throw", "true", "try", "typedef", "typename", "union",
    "unsigned", "using", "virtual", "void", "volatile", "while",
];

/// The reserved-word table for the active language rules. Constructed once
/// per run and passed explicitly to the classifier so there is no ambient
/// mutable state shared between runs.
#[derive(Debug, Clone)]
pub struct Keywords {
    words: HashSet<&'static str>,
}

impl Keywords {
    pub fn new() -> Keywords {
        Keywords {
            words: RESERVED
                .iter()
                .copied()
                .collect(),
        }
    }

    pub fn is_reserved(&self, text: &str) -> bool {
        self.words
            .contains(text)
    }
}

impl Default for Keywords {
    fn default() -> Keywords {
        Keywords::new()
    }
}
