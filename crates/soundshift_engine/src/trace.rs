//! Derivations: how a word changed, rule by rule.
//!
//! [`Engine::derive`](crate::Engine::derive) records a [`DerivationStep`]
//! for every rule that altered the word. Formatters render the record.

use std::fmt::Write;

// =============================================================================
// Derivation
// =============================================================================

/// One rule's effect on a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationStep {
    /// Position of the rule in registration order.
    pub rule_index: usize,
    /// The rule's notation.
    pub rule: String,
    /// The word before the rule's sweep.
    pub before: String,
    /// The word after the rule's sweep.
    pub after: String,
}

/// The full history of a word through the rule list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation {
    /// The word as given, trimmed.
    pub input: String,
    /// Steps for the rules that changed the word, in application order.
    pub steps: Vec<DerivationStep>,
    /// The final word.
    pub output: String,
}

impl Derivation {
    /// Returns true if no rule changed the word.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.steps.is_empty()
    }
}

// =============================================================================
// Formatters
// =============================================================================

/// Renders derivations as text.
pub trait DerivationFormatter {
    /// Formats a single step.
    fn format_step(&self, step: &DerivationStep) -> String;

    /// Formats a whole derivation, one line per step.
    fn format(&self, derivation: &Derivation) -> String {
        derivation
            .steps
            .iter()
            .map(|step| self.format_step(step))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats derivations as `before → after` lines.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to prefix each line with the rule index.
    pub show_index: bool,
    /// Whether to prefix each line with the rule notation.
    pub show_rule: bool,
}

impl HumanFormatter {
    /// Creates a formatter that prints only the words.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show rule indices.
    #[must_use]
    pub fn with_index(mut self) -> Self {
        self.show_index = true;
        self
    }

    /// Builder method to show rule notation.
    #[must_use]
    pub fn with_rule(mut self) -> Self {
        self.show_rule = true;
        self
    }
}

impl DerivationFormatter for HumanFormatter {
    fn format_step(&self, step: &DerivationStep) -> String {
        let mut line = String::new();
        if self.show_index {
            let _ = write!(line, "[{}] ", step.rule_index);
        }
        if self.show_rule {
            let _ = write!(line, "{}: ", step.rule);
        }
        let _ = write!(line, "{} → {}", step.before, step.after);
        line
    }
}
