//! Syntax highlighting for the REPL.

use std::borrow::Cow;

/// Highlighter for sound change notation.
pub struct NotationHighlighter;

impl NotationHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let trimmed = line.trim_start();

        // Comments and session commands color the whole line
        if trimmed.starts_with("//") {
            return Cow::Owned(format!("\x1b[2;3m{line}\x1b[0m"));
        }
        if trimmed.starts_with(':') {
            return Cow::Owned(format!("\x1b[36m{line}\x1b[0m"));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                // Change arrow and declaration
                '>' | '=' => {
                    result.push_str("\x1b[1;32m"); // bold green
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                // Clause separators
                '/' | '!' => {
                    result.push_str("\x1b[33m"); // yellow
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                // Movement with its offset
                '@' => {
                    result.push_str("\x1b[35m"); // magenta
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_digit() || next == '-' || next == ' ' {
                            result.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    result.push_str("\x1b[0m");
                }

                // Cursor placeholder and boundary
                '_' | '#' => {
                    result.push_str("\x1b[1m"); // bold
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                ',' => {
                    result.push_str("\x1b[2m"); // dim
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                // Category identifiers are conventionally capitals
                c if c.is_uppercase() => {
                    result.push_str("\x1b[34m"); // blue
                    result.push(c);
                    result.push_str("\x1b[0m");
                }

                _ => result.push(c),
            }
        }

        Cow::Owned(result)
    }
}

impl Default for NotationHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
