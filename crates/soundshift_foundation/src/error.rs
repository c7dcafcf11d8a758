//! Error types for the Soundshift system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result type alias using the Soundshift [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Soundshift operations.
#[derive(Debug, Error)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ctx) = &self.context {
            write!(f, " {ctx}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a pattern error for a matcher that failed to build.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates a syntax error for notation text that does not conform.
    #[must_use]
    pub fn syntax(message: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            text: text.into(),
        })
    }

    /// Creates an empty word error.
    #[must_use]
    pub fn empty_word() -> Self {
        Self::new(ErrorKind::EmptyWord)
    }

    /// Creates a sweep step limit error.
    #[must_use]
    pub fn limit_exceeded(limit: usize, rule: impl Into<String>) -> Self {
        Self::new(ErrorKind::LimitExceeded {
            limit,
            rule: rule.into(),
        })
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if a pattern failed to compile.
    #[must_use]
    pub fn is_pattern(&self) -> bool {
        matches!(self.kind, ErrorKind::Pattern { .. })
    }

    /// Returns true if notation text failed to parse.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    /// Returns true if the input word was blank.
    #[must_use]
    pub fn is_empty_word(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyWord)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A compiled matcher failed to build.
    #[error("invalid pattern `{pattern}`: {message}")]
    Pattern {
        /// The pattern source handed to the regex compiler.
        pattern: String,
        /// The compiler's diagnostic.
        message: String,
    },

    /// Notation text does not conform to the rule grammar.
    #[error("syntax error: {message} in `{text}`")]
    Syntax {
        /// What was wrong.
        message: String,
        /// The offending text.
        text: String,
    },

    /// The input word was blank after trimming.
    #[error("empty word given")]
    EmptyWord,

    /// A single rule took more sweep steps than allowed.
    #[error("sweep limit ({limit} steps) exceeded by rule `{rule}`")]
    LimitExceeded {
        /// The configured limit.
        limit: usize,
        /// The rule that ran away.
        rule: String,
    },

    /// A ruleset file could not be read.
    #[error("failed to read {path}: {message}")]
    Io {
        /// The path that was read.
        path: String,
        /// The underlying error message.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// The source line that failed.
    pub text: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the offending source text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}")?,
            (Some(source), None) => write!(f, "at {source}")?,
            (None, Some(line)) => write!(f, "at line {line}")?,
            (None, None) => {}
        }
        if let Some(text) = &self.text {
            write!(f, "\n  | {text}")?;
        }
        Ok(())
    }
}
