//! Target clause compilation.
//!
//! The target lists the sounds or categories a rule acts on, separated by
//! commas. It compiles into a single alternation anchored at the cursor.

use regex::Regex;
use soundshift_foundation::Result;
use soundshift_foundation::symbols::CLAUSE;

use crate::category::CategoryTable;
use crate::pattern;

/// What to match at the cursor.
#[derive(Clone, Debug)]
pub struct Target {
    pattern: Regex,
}

impl Target {
    /// The compiled, start-anchored pattern.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Matches against the unconsumed rest of a word, returning the byte
    /// length of the match if it starts at offset 0.
    #[must_use]
    pub fn match_len(&self, remainder: &str) -> Option<usize> {
        self.pattern
            .find(remainder)
            .filter(|m| m.start() == 0)
            .map(|m| m.end())
    }
}

/// Compiles target text.
pub struct TargetCompiler;

impl TargetCompiler {
    /// Compiles a comma-separated target list.
    ///
    /// Blank alternatives are dropped, since an empty branch would match
    /// everywhere. Text with no remaining alternatives means the rule has
    /// no target.
    ///
    /// # Errors
    /// Returns a pattern error if an alternative does not compile.
    pub fn compile(text: &str, categories: &CategoryTable) -> Result<Option<Target>> {
        let alternatives: Vec<String> = text
            .split(CLAUSE)
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .map(|alt| categories.expand(alt))
            .collect();
        if alternatives.is_empty() {
            return Ok(None);
        }

        let pattern = pattern::compile(&format!("^({})", alternatives.join("|")))?;

        Ok(Some(Target { pattern }))
    }
}
