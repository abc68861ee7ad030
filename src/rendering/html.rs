use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::annotating::Overlays;

static SHELL: &'static str = "<html><head></head><body><pre>\n{body}</pre></body></html>\n";

#[derive(Serialize)]
struct Context {
    body: String,
}

/// Render the formatted text and its overlays as a complete HTML document.
/// We do this in two passes. First we count the lines, since the width of
/// the line-number gutter depends on the total for the whole file. Then we
/// walk the text byte by byte, merging in gutters, markup, and character
/// substitutions, and wrap the result in the document shell.
pub fn render(formatted: &str, overlays: &Overlays) -> String {
    let body = annotate_body(formatted, overlays);

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("document", SHELL)
        .expect("document shell template is valid");

    let context = Context {
        body,
    };

    tt.render("document", &context)
        .expect("render document shell")
}

// Pass 2: merge text, gutters, and overlays. Markup for an offset goes out
// before the character at that offset; a substitution replaces the
// character outright, the two are never both emitted. A span can close at
// the end of the buffer, so any markup keyed there is flushed after the
// walk.
fn annotate_body(formatted: &str, overlays: &Overlays) -> String {
    let lines = count_lines(formatted);
    let width = calculate_padding(lines);
    debug!(lines, width, "rendering");

    let mut output = String::with_capacity(formatted.len() * 2);
    let mut line_number = 1;
    let mut at_line_start = true;

    for (offset, c) in formatted.char_indices() {
        if at_line_start {
            output.push_str(&format!("{:>width$} ", line_number));
            line_number += 1;
            at_line_start = false;
        }

        if let Some(markup) = overlays
            .markup
            .get(&offset)
        {
            output.push_str(markup);
        }

        if let Some(replacement) = overlays
            .substitutions
            .get(&offset)
        {
            output.push_str(replacement);
        } else {
            output.push(c);
        }

        if c == '\n' {
            at_line_start = true;
        }
    }

    if let Some(markup) = overlays
        .markup
        .get(&formatted.len())
    {
        output.push_str(markup);
    }

    output
}

// Count the lines in the text, including a final line not terminated by a
// newline. Zero for empty text.
fn count_lines(text: &str) -> usize {
    let newlines = text
        .bytes()
        .filter(|&b| b == b'\n')
        .count();

    if !text.is_empty() && !text.ends_with('\n') {
        newlines + 1
    } else {
        newlines
    }
}

// The number of decimal digits in num, minimum 1.
fn calculate_padding(num: usize) -> usize {
    let mut digits = 1;
    let mut num = num / 10;
    while num != 0 {
        digits += 1;
        num /= 10;
    }
    digits
}
