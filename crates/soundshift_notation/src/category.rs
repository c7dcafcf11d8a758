//! Categories of interchangeable sounds and pattern expansion.
//!
//! A category such as `V = a,e,i,o,u` can stand in for any of its sounds
//! inside target and condition text. Expansion replaces every symbol that
//! names a category with that category's parenthesized alternation; any
//! other symbol passes through verbatim.

use regex::Regex;
use soundshift_foundation::Result;
use tracing::debug;

use crate::pattern;

// =============================================================================
// Category
// =============================================================================

/// A named set of sounds, compiled into an alternation.
#[derive(Clone, Debug)]
pub struct Category {
    identifier: String,
    sounds: Vec<String>,
    pattern: Regex,
}

impl Category {
    /// Builds a category whose pattern is the alternation of `sounds`.
    ///
    /// Sounds are inserted into the pattern unescaped, so a sound may itself
    /// use regex syntax.
    ///
    /// # Errors
    /// Returns a pattern error if the alternation does not compile.
    pub fn new<S: AsRef<str>>(identifier: impl Into<String>, sounds: &[S]) -> Result<Self> {
        let sounds: Vec<String> = sounds.iter().map(|s| s.as_ref().to_string()).collect();
        let pattern = pattern::compile(&sounds.join("|"))?;
        Ok(Self {
            identifier: identifier.into(),
            sounds,
            pattern,
        })
    }

    /// The identifier used to reference this category.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The sounds in declaration order.
    #[must_use]
    pub fn sounds(&self) -> &[String] {
        &self.sounds
    }

    /// The compiled alternation, e.g. `a|b|c`.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

// =============================================================================
// Category Table
// =============================================================================

/// Ordered, append-only collection of categories.
///
/// Duplicate identifiers are accepted; lookup returns the first one
/// registered, so a later duplicate is never reachable.
#[derive(Clone, Debug, Default)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles and appends a category.
    ///
    /// # Errors
    /// Returns a pattern error if the sounds do not form a valid alternation;
    /// the table is left unchanged.
    pub fn add<S: AsRef<str>>(&mut self, identifier: impl Into<String>, sounds: &[S]) -> Result<()> {
        let category = Category::new(identifier, sounds)?;
        debug!(
            identifier = category.identifier(),
            pattern = category.pattern().as_str(),
            "category registered"
        );
        self.categories.push(category);
        Ok(())
    }

    /// Finds the first category with the given identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.identifier == identifier)
    }

    /// Iterates categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no category is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Substitutes category identifiers in `text` with their parenthesized
    /// alternations. Unknown symbols are copied literally.
    #[must_use]
    pub fn expand(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            match self.get(ch.encode_utf8(&mut buf)) {
                Some(category) => {
                    out.push('(');
                    out.push_str(category.pattern.as_str());
                    out.push(')');
                }
                None => out.push(ch),
            }
        }
        out
    }

    /// Expands `text` and compiles the result.
    ///
    /// Blank input yields `None`.
    ///
    /// # Errors
    /// Returns a pattern error if the expansion does not compile.
    pub fn expand_pattern(&self, text: &str) -> Result<Option<Regex>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        pattern::compile(&self.expand(text)).map(Some)
    }
}
