//! Ruleset sources.
//!
//! A ruleset is line oriented:
//!
//! ```text
//! // Comments start with two slashes
//! V = a, e, i, o, u
//! C = p, t, k
//! C>/V_V
//! ```
//!
//! A line with `=` and no `>` declares a category; every other non-blank,
//! non-comment line is a rule. Parsing only splits the source; compilation
//! happens when the statements are registered.

use soundshift_foundation::symbols::{CHANGE, CLAUSE, COMMENT, DECLARE};
use soundshift_foundation::{Error, ErrorContext, Result};

/// A single declaration from a ruleset source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `ID = s1, s2, ...`
    Category {
        /// The category identifier.
        identifier: String,
        /// The sounds, trimmed, blanks dropped.
        sounds: Vec<String>,
        /// 1-based source line.
        line: usize,
    },
    /// A rule in sound change notation.
    Rule {
        /// The rule text, trimmed.
        text: String,
        /// 1-based source line.
        line: usize,
    },
}

impl Statement {
    /// The source line this statement came from.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Category { line, .. } | Self::Rule { line, .. } => *line,
        }
    }
}

/// Splits a ruleset source into statements.
///
/// # Errors
/// Returns a syntax error, with the offending line as context, for a
/// category declaration without an identifier.
pub fn parse_ruleset(source: &str) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with(COMMENT) {
            continue;
        }

        if text.contains(DECLARE) && !text.contains(CHANGE) {
            let statement = parse_category(text, line)
                .map_err(|e| e.with_context(ErrorContext::new().with_line(line).with_text(text)))?;
            statements.push(statement);
        } else {
            statements.push(Statement::Rule {
                text: text.to_string(),
                line,
            });
        }
    }

    Ok(statements)
}

fn parse_category(text: &str, line: usize) -> Result<Statement> {
    let (identifier, sounds) = text
        .split_once(DECLARE)
        .ok_or_else(|| Error::syntax("invalid category declaration", text))?;
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(Error::syntax("invalid category declaration", text));
    }

    let sounds = sounds
        .split(CLAUSE)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Ok(Statement::Category {
        identifier: identifier.to_string(),
        sounds,
        line,
    })
}
