//! Change clause compilation.
//!
//! A change is a replacement, a movement (`@N`), both (`x@-2`), or, when
//! blank, a deletion.

use soundshift_foundation::symbols::MOVEMENT;
use soundshift_foundation::{Error, Result};

/// What a matched segment is changed to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Change {
    /// Replacement text. Empty means "keep the matched text".
    pub replacement: String,
    /// Signed movement offset in symbols. Zero means no movement.
    pub movement: i32,
    /// Delete the matched segment. Overrides replacement and movement.
    pub deletion: bool,
}

impl Change {
    /// A change that deletes the matched segment.
    #[must_use]
    pub fn deletion() -> Self {
        Self {
            deletion: true,
            ..Self::default()
        }
    }

    /// A change that replaces the matched segment in place.
    #[must_use]
    pub fn replace(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            ..Self::default()
        }
    }

    /// Builder method to add a movement offset.
    #[must_use]
    pub fn with_movement(mut self, movement: i32) -> Self {
        self.movement = movement;
        self
    }
}

/// Compiles change text.
pub struct ChangeCompiler;

impl ChangeCompiler {
    /// Compiles `REPLACEMENT[@MOVEMENT]`, or blank for deletion.
    ///
    /// # Errors
    /// Returns a syntax error if there is more than one movement operator or
    /// the movement is not an integer.
    pub fn compile(text: &str) -> Result<Change> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Change::deletion());
        }

        let parts: Vec<&str> = text.split(MOVEMENT).collect();
        match parts.as_slice() {
            [replacement] => Ok(Change::replace(replacement.trim())),
            [replacement, movement] => {
                let movement = movement
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| Error::syntax("invalid movement", text))?;
                Ok(Change::replace(replacement.trim()).with_movement(movement))
            }
            _ => Err(Error::syntax("too many movement operators", text)),
        }
    }
}
