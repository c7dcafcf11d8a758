//! Reserved characters of the sound change notation.
//!
//! A rule is written `TARGET>CHANGE/CONDITION!EXCEPTION/ALTERNATIVE`.

/// Marks a word edge. Prepended and appended to every word during a sweep.
pub const BOUNDARY: char = '#';

/// Separates the target from the change.
pub const CHANGE: char = '>';

/// Introduces the condition, and the alternative after an exception.
pub const CONDITION: char = '/';

/// Introduces the exception.
pub const EXCEPTION: char = '!';

/// Separates a replacement from its movement offset.
pub const MOVEMENT: char = '@';

/// Separates the before and after halves of a local environment.
pub const CONTEXT: char = '_';

/// Separates alternatives in a target and clauses in a condition.
pub const CLAUSE: char = ',';

/// Separates a category identifier from its sounds in ruleset sources.
pub const DECLARE: char = '=';

/// Introduces a comment line in ruleset sources.
pub const COMMENT: &str = "//";
