//! Regex compilation shared by the clause compilers.

use regex::Regex;
use soundshift_foundation::{Error, Result};

/// Compiles a pattern, mapping failure to a pattern error.
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::pattern(pattern, e.to_string()))
}
