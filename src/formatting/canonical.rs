use crate::error::FormatError;
use crate::formatting::Format;

/// The canonical reformatter for C-family source: expands tabs, strips
/// trailing whitespace, re-indents by brace depth, collapses runs of blank
/// lines, and guarantees a trailing newline. The output is a fixed point,
/// so formatting it again changes nothing.
pub struct Canonical;

struct Style {
    indent: usize,
}

fn lookup_style(name: &str) -> Result<Style, FormatError> {
    match name {
        "default" => Ok(Style {
            indent: 4,
        }),
        "compact" => Ok(Style {
            indent: 2,
        }),
        _ => Err(FormatError {
            problem: "unrecognized style".to_string(),
            details: name.to_string(),
        }),
    }
}

fn unbalanced(number: usize) -> FormatError {
    FormatError {
        problem: "unbalanced braces".to_string(),
        details: format!("line {}", number),
    }
}

impl Format for Canonical {
    fn format(&self, raw: &str, style: &str) -> Result<String, FormatError> {
        let style = lookup_style(style)?;
        let mut output = Reformatter::new(style);

        for (i, line) in raw
            .lines()
            .enumerate()
        {
            output.reformat_line(line, i + 1)?;
        }

        output.finish()
    }
}

struct Reformatter {
    style: Style,
    buffer: String,
    depth: usize,
    in_block_comment: bool,
    previous_blank: bool,
}

impl Reformatter {
    fn new(style: Style) -> Reformatter {
        Reformatter {
            style,
            buffer: String::new(),
            depth: 0,
            in_block_comment: false,
            previous_blank: false,
        }
    }

    fn append_str(&mut self, text: &str) {
        self.buffer
            .push_str(text);
    }

    fn append_newline(&mut self) {
        self.buffer
            .push('\n');
    }

    fn is_empty(&self) -> bool {
        self.buffer
            .is_empty()
    }

    fn reformat_line(&mut self, line: &str, number: usize) -> Result<(), FormatError> {
        let line = line.replace('\t', "    ");
        let trimmed = line.trim_end();

        if self.in_block_comment {
            // the interior of a block comment is left as written
            self.append_str(trimmed);
            self.append_newline();
            return self.scan_braces(trimmed, number);
        }

        let content = trimmed.trim_start();

        if content.is_empty() {
            // collapse runs of blank lines, and drop leading ones entirely
            if !self.previous_blank && !self.is_empty() {
                self.append_newline();
            }
            self.previous_blank = true;
            return Ok(());
        }
        self.previous_blank = false;

        // closing braces at the start of the line dedent the line itself
        let closers = content
            .chars()
            .take_while(|&c| c == '}')
            .count();
        let level = self
            .depth
            .checked_sub(closers)
            .ok_or_else(|| unbalanced(number))?;

        // preprocessor directives stay in the first column
        if !content.starts_with('#') {
            for _ in 0..level * self.style.indent {
                self.buffer
                    .push(' ');
            }
        }
        self.append_str(content);
        self.append_newline();

        self.scan_braces(content, number)
    }

    // Track brace depth across the line, skipping braces that appear inside
    // string or character literals and comments.
    fn scan_braces(&mut self, content: &str, number: usize) -> Result<(), FormatError> {
        let bytes = content.as_bytes();
        let mut in_string: Option<u8> = None;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];

            if self.in_block_comment {
                if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    self.in_block_comment = false;
                    i += 2;
                    continue;
                }
                i += 1;
                continue;
            }

            if let Some(quote) = in_string {
                if b == b'\\' {
                    i += 2;
                    continue;
                }
                if b == quote {
                    in_string = None;
                }
                i += 1;
                continue;
            }

            match b {
                b'"' | b'\'' => in_string = Some(b),
                b'/' if bytes.get(i + 1) == Some(&b'/') => break,
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    self.in_block_comment = true;
                    i += 2;
                    continue;
                }
                b'{' => self.depth += 1,
                b'}' => {
                    self.depth = self
                        .depth
                        .checked_sub(1)
                        .ok_or_else(|| unbalanced(number))?;
                }
                _ => {}
            }
            i += 1;
        }

        Ok(())
    }

    fn finish(self) -> Result<String, FormatError> {
        if self.depth != 0 {
            return Err(FormatError {
                problem: "unbalanced braces".to_string(),
                details: format!("{} left unclosed at end of input", self.depth),
            });
        }

        let mut buffer = self.buffer;
        while buffer.ends_with("\n\n") {
            buffer.pop();
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn canonical_input_unchanged() {
        let content = "int main() {\n    return 0;\n}\n";
        let result = Canonical
            .format(content, "default")
            .unwrap();

        assert_eq!(result, content);
    }

    #[test]
    fn reindents_by_brace_depth() {
        let content = "int main() {\nreturn 0;\n}\n";
        let result = Canonical
            .format(content, "default")
            .unwrap();

        assert_eq!(result, "int main() {\n    return 0;\n}\n");
    }

    #[test]
    fn compact_style_uses_two_spaces() {
        let content = "int main() {\nreturn 0;\n}\n";
        let result = Canonical
            .format(content, "compact")
            .unwrap();

        assert_eq!(result, "int main() {\n  return 0;\n}\n");
    }

    #[test]
    fn blank_lines_collapse() {
        let content = "\n\na;\n\n\n\nb;\n\n";
        let result = Canonical
            .format(content, "default")
            .unwrap();

        assert_eq!(result, "a;\n\nb;\n");
    }

    #[test]
    fn tabs_become_spaces() {
        let content = "if (x) {\n\ty;\n}\n";
        let result = Canonical
            .format(content, "default")
            .unwrap();

        assert_eq!(result, "if (x) {\n    y;\n}\n");
    }

    #[test]
    fn braces_in_literals_ignored() {
        let content = "char c = '{';\nchar *s = \"}}\";\n";
        let result = Canonical
            .format(content, "default")
            .unwrap();

        assert_eq!(result, content);
    }

    #[test]
    fn braces_in_comments_ignored() {
        let content = "// {\nx;\n/* {{\n   }} */\ny;\n";
        let result = Canonical
            .format(content, "default")
            .unwrap();

        assert_eq!(result, content);
    }

    #[test]
    fn preprocessor_stays_left() {
        let content = "int main() {\n#define X 1\nreturn X;\n}\n";
        let result = Canonical
            .format(content, "default")
            .unwrap();

        assert_eq!(result, "int main() {\n#define X 1\n    return X;\n}\n");
    }

    #[test]
    fn unknown_style_rejected() {
        let result = Canonical.format("x;\n", "baroque");

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.problem, "unrecognized style");
    }

    #[test]
    fn stray_closer_rejected() {
        let result = Canonical.format("}\n", "default");

        assert!(result.is_err());
    }

    #[test]
    fn unclosed_brace_rejected() {
        let result = Canonical.format("int main() {\nreturn 0;\n", "default");

        assert!(result.is_err());
    }

    #[test]
    fn empty_input_stays_empty() {
        let result = Canonical
            .format("", "default")
            .unwrap();

        assert_eq!(result, "");
    }
}
