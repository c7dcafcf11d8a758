//! Rule compilation.
//!
//! A rule is written `TARGET>CHANGE[/CONDITION[!EXCEPTION[/ALTERNATIVE]]]`.
//! The text is split by a fixed grammar and each part is routed to its
//! clause compiler. Any failure aborts the whole rule.

use once_cell::sync::Lazy;
use regex::Regex;
use soundshift_foundation::{Error, Result};

use crate::category::CategoryTable;
use crate::change::{Change, ChangeCompiler};
use crate::condition::{Condition, ConditionCompiler, Environment};
use crate::target::{Target, TargetCompiler};

/// The five-part rule skeleton.
static RULE_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?)>(.*?)(?:/(.*?)(?:!(.*?)(?:/(.*?))?)?)?$").unwrap()
});

// =============================================================================
// Rule
// =============================================================================

/// A compiled sound change rule.
#[derive(Clone, Debug)]
pub struct Rule {
    /// The notation this rule was compiled from.
    pub source: String,
    /// What to match at the cursor. `None` matches a zero-width point.
    pub target: Option<Target>,
    /// The primary change.
    pub change: Change,
    /// Environment that must hold for the rule to apply.
    pub condition: Option<Condition>,
    /// Environment under which the primary change is withheld.
    pub exception: Option<Condition>,
    /// Change applied instead when the exception holds.
    pub alternative: Option<Change>,
    /// Number of sweeps. Always 1; re-application is not supported.
    pub repetition: u32,
}

impl Rule {
    /// Chooses the change to execute at a position whose target matched
    /// `matched` symbols, or `None` to leave the position untouched.
    ///
    /// The condition must hold. If an exception is given and holds, the
    /// alternative is chosen when present, otherwise nothing is.
    pub fn select_change(&self, env: &impl Environment, matched: usize) -> Option<&Change> {
        if let Some(condition) = &self.condition {
            if !condition.holds(env, matched) {
                return None;
            }
        }
        match &self.exception {
            Some(exception) if exception.holds(env, matched) => self.alternative.as_ref(),
            _ => Some(&self.change),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

// =============================================================================
// Rule Compiler
// =============================================================================

/// Compiles rule text into executable rules.
pub struct RuleCompiler;

impl RuleCompiler {
    /// Compiles a single rule.
    ///
    /// # Errors
    /// Returns a syntax error if the text does not fit the rule grammar, or
    /// any error raised by a clause compiler.
    pub fn compile(text: &str, categories: &CategoryTable) -> Result<Rule> {
        let parts = RULE_GRAMMAR
            .captures(text)
            .ok_or_else(|| Error::syntax("rule does not parse", text))?;
        let part = |i: usize| parts.get(i).map(|m| m.as_str());

        let target = TargetCompiler::compile(part(1).unwrap_or_default(), categories)?;
        let change = ChangeCompiler::compile(part(2).unwrap_or_default())?;
        let condition = ConditionCompiler::compile(part(3).unwrap_or_default(), categories)?;
        let exception = ConditionCompiler::compile(part(4).unwrap_or_default(), categories)?;
        let alternative = part(5).map(ChangeCompiler::compile).transpose()?;

        Ok(Rule {
            source: text.trim().to_string(),
            target,
            change,
            condition,
            exception,
            alternative,
            repetition: 1,
        })
    }

    /// Compiles several rules, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first compilation error.
    pub fn compile_all<S: AsRef<str>>(texts: &[S], categories: &CategoryTable) -> Result<Vec<Rule>> {
        texts
            .iter()
            .map(|t| Self::compile(t.as_ref(), categories))
            .collect()
    }
}
