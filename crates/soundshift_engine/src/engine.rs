//! The engine instance: registered categories and rules.

use soundshift_foundation::{ErrorContext, Result};
use soundshift_notation::{CategoryTable, Rule, RuleCompiler, Statement, parse_ruleset};
use tracing::debug;

use crate::config::EngineConfig;
use crate::sweep::sweep;
use crate::trace::{Derivation, DerivationStep};
use crate::word::Word;

/// Holds a ruleset and applies it to words.
///
/// Registration is append-only. Application never touches the registered
/// state, so an engine can be shared across threads once built.
///
/// # Example
///
/// ```
/// use soundshift_engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.add_category("V", &["a", "e", "i", "o", "u"]).unwrap();
/// engine.add_rule("t>d/V_V").unwrap();
/// assert_eq!(engine.apply("pata").unwrap(), "pada");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Engine {
    categories: CategoryTable,
    rules: Vec<Rule>,
    config: EngineConfig,
}

impl Engine {
    /// Creates an empty engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty engine with the given configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registers a category. Later declarations of the same identifier are
    /// stored but shadowed by the first.
    ///
    /// # Errors
    /// Returns a pattern error if the sounds do not form a valid pattern.
    pub fn add_category<S: AsRef<str>>(&mut self, identifier: &str, sounds: &[S]) -> Result<()> {
        self.categories.add(identifier, sounds)
    }

    /// Compiles and registers a rule after those already registered.
    ///
    /// # Errors
    /// Returns a syntax or pattern error if the rule does not compile. No
    /// rule is registered in that case.
    pub fn add_rule(&mut self, text: &str) -> Result<()> {
        let rule = RuleCompiler::compile(text, &self.categories)?;
        debug!(rule = %rule, index = self.rules.len(), "rule registered");
        self.rules.push(rule);
        Ok(())
    }

    /// Registers every statement in a ruleset source.
    ///
    /// Either the whole source registers or nothing does. Errors carry the
    /// offending line.
    ///
    /// # Errors
    /// Returns the first parse or compile error.
    pub fn load_ruleset(&mut self, source: &str) -> Result<()> {
        let statements = parse_ruleset(source)?;
        let mut staged = self.clone();

        for statement in statements {
            let (line, result) = match &statement {
                Statement::Category {
                    identifier,
                    sounds,
                    line,
                } => (*line, staged.add_category(identifier, sounds.as_slice())),
                Statement::Rule { text, line } => (*line, staged.add_rule(text)),
            };
            result.map_err(|e| {
                let text = source.lines().nth(line - 1).unwrap_or_default().trim();
                e.with_context(ErrorContext::new().with_line(line).with_text(text))
            })?;
        }

        *self = staged;
        Ok(())
    }

    /// The registered rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The registered categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Removes all categories and rules. The configuration is kept.
    pub fn clear(&mut self) {
        self.categories = CategoryTable::new();
        self.rules.clear();
    }

    /// Applies every rule, in order, to `word`.
    ///
    /// # Errors
    /// Returns an empty word error for blank input, or a limit error if a
    /// rule runs away.
    pub fn apply(&self, word: &str) -> Result<String> {
        let mut word = Word::new(word)?;
        for rule in &self.rules {
            sweep(rule, &mut word, &self.config)?;
        }
        Ok(word.into_string())
    }

    /// Applies the rules like [`apply`](Self::apply), recording each rule
    /// that changed the word.
    ///
    /// # Errors
    /// Same as [`apply`](Self::apply).
    pub fn derive(&self, word: &str) -> Result<Derivation> {
        let mut word = Word::new(word)?;
        let input = word.to_string();
        let mut steps = Vec::new();

        for (rule_index, rule) in self.rules.iter().enumerate() {
            let before = word.to_string();
            sweep(rule, &mut word, &self.config)?;
            let after = word.to_string();
            if before != after {
                steps.push(DerivationStep {
                    rule_index,
                    rule: rule.source.clone(),
                    before,
                    after,
                });
            }
        }

        Ok(Derivation {
            input,
            steps,
            output: word.into_string(),
        })
    }
}
