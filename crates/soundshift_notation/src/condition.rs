//! Condition and exception clause compilation.
//!
//! A condition is a comma-separated list of clauses. Each clause is either
//! a global pattern tested against the whole bounded word (`#ka`), or a
//! local `before_after` environment around the cursor (`V_#`). Every
//! clause must hold for the condition to hold.

use std::borrow::Cow;

use regex::Regex;
use soundshift_foundation::symbols::{CLAUSE, CONTEXT};
use soundshift_foundation::{Error, Result};

use crate::category::CategoryTable;
use crate::pattern;

// =============================================================================
// Environment
// =============================================================================

/// Views of a word at a scan position, used to evaluate conditions.
///
/// Views are borrowed where the implementor can slice its own buffer.
pub trait Environment {
    /// The whole word including boundary markers.
    fn bounded(&self) -> Cow<'_, str>;

    /// Everything before the cursor, boundary included.
    fn before(&self) -> Cow<'_, str>;

    /// Everything from `skip` symbols past the cursor, boundary included.
    fn after(&self, skip: usize) -> Cow<'_, str>;
}

// =============================================================================
// Clause
// =============================================================================

/// A single environment constraint.
#[derive(Clone, Debug)]
pub enum Clause {
    /// Must match somewhere in the bounded word.
    Global(Regex),
    /// Must match immediately around the cursor. Either side may be absent.
    Local {
        /// Anchored at its end, tested against the text before the cursor.
        pre: Option<Regex>,
        /// Anchored at its start, tested against the text after the match.
        post: Option<Regex>,
    },
}

impl Clause {
    /// Tests this clause, where `matched` is the target length in symbols.
    pub fn holds(&self, env: &impl Environment, matched: usize) -> bool {
        match self {
            Self::Global(pattern) => pattern.is_match(&env.bounded()),
            Self::Local { pre, post } => {
                if let Some(pre) = pre {
                    let before = env.before();
                    if before.is_empty() || !pre.is_match(&before) {
                        return false;
                    }
                }
                if let Some(post) = post {
                    let after = env.after(matched);
                    if after.is_empty() || !post.is_match(&after) {
                        return false;
                    }
                }
                true
            }
        }
    }
}

// =============================================================================
// Condition
// =============================================================================

/// An ordered conjunction of clauses.
#[derive(Clone, Debug)]
pub struct Condition {
    clauses: Vec<Clause>,
}

impl Condition {
    /// The clauses in declaration order.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns true if every clause holds.
    pub fn holds(&self, env: &impl Environment, matched: usize) -> bool {
        self.clauses.iter().all(|clause| clause.holds(env, matched))
    }
}

/// Compiles condition and exception text.
pub struct ConditionCompiler;

impl ConditionCompiler {
    /// Compiles a comma-separated clause list.
    ///
    /// Blank text means no condition. Blank clauses are skipped.
    ///
    /// # Errors
    /// Returns a syntax error if a clause has more than one `_`, or a
    /// pattern error if a clause does not compile.
    pub fn compile(text: &str, categories: &CategoryTable) -> Result<Option<Condition>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let clauses = text
            .split(CLAUSE)
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .map(|clause| Self::compile_clause(clause, categories))
            .collect::<Result<Vec<_>>>()?;

        if clauses.is_empty() {
            return Ok(None);
        }
        Ok(Some(Condition { clauses }))
    }

    fn compile_clause(clause: &str, categories: &CategoryTable) -> Result<Clause> {
        let halves: Vec<&str> = clause.split(CONTEXT).collect();
        match halves.as_slice() {
            [global] => {
                let pattern = pattern::compile(&categories.expand(global))?;
                Ok(Clause::Global(pattern))
            }
            [pre, post] => {
                let pre = Self::side(pre, categories, |p| format!("{p}$"))?;
                let post = Self::side(post, categories, |p| format!("^{p}"))?;
                Ok(Clause::Local { pre, post })
            }
            _ => Err(Error::syntax("invalid condition", clause)),
        }
    }

    fn side(
        text: &str,
        categories: &CategoryTable,
        anchor: impl Fn(&str) -> String,
    ) -> Result<Option<Regex>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        pattern::compile(&anchor(&categories.expand(text))).map(Some)
    }
}
