//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable.

use crate::highlight::NotationHighlighter;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use soundshift_foundation::{Error, Result};
use std::borrow::Cow;

/// Session commands offered for completion.
const COMMANDS: [&str; 8] = [
    ":rules",
    ":categories",
    ":clear",
    ":trace on",
    ":trace off",
    ":load ",
    ":help",
    "//",
];

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the category identifiers offered for completion.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct NotationHelper {
    #[rustyline(Completer)]
    completer: NotationCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: NotationHighlighter,
}

impl Highlighter for NotationHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for session commands, category identifiers, and file paths.
struct NotationCompleter {
    file_completer: FilenameCompleter,
    keywords: Vec<String>,
}

impl NotationCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            keywords: Vec::new(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let pair = |candidate: &str| Pair {
            display: candidate.to_string(),
            replacement: candidate.to_string(),
        };

        // Commands complete from the start of the line
        if line.starts_with(':') || line.starts_with('/') {
            let typed = &line[..pos];
            let candidates = COMMANDS
                .iter()
                .filter(|command| command.starts_with(typed))
                .map(|command| pair(command))
                .collect();
            return (0, candidates);
        }

        // Otherwise, complete category identifiers in the current token
        let start = line[..pos]
            .rfind(|c: char| c.is_whitespace() || ">/!_,=@#".contains(c))
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];
        let candidates = self
            .keywords
            .iter()
            .filter(|keyword| keyword.starts_with(word))
            .map(|keyword| pair(keyword))
            .collect();
        (start, candidates)
    }
}

impl Completer for NotationCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if line.starts_with(":load ") && pos > ":load ".len() {
            return self.file_completer.complete(line, pos, ctx);
        }
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<NotationHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = NotationHelper {
            completer: NotationCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: NotationHighlighter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
