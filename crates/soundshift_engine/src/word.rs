//! Words as scanned and rewritten by rules.
//!
//! A [`Word`] keeps its symbols between two boundary markers (`#`) and a
//! scan index. Index 0 is the leading boundary; a sweep starts there and
//! [`Word::advance`]s until it reaches a boundary.
//!
//! The symbols are mirrored into a joined string with per-symbol byte
//! offsets, so the views a sweep reads at every step are borrowed slices.

use std::borrow::Cow;
use std::fmt;

use soundshift_foundation::symbols::BOUNDARY;
use soundshift_foundation::{Error, Result};
use soundshift_notation::{Change, Environment, Target};
use tracing::warn;

use crate::config::CursorPolicy;

/// Direction and distance of a movement after clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shift {
    Stay,
    Left(usize),
    Right(usize),
}

/// A boundary-delimited word with a movable scan position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    symbols: Vec<char>,
    /// The symbols joined, rebuilt after every rewrite.
    text: String,
    /// Byte offset of each symbol in `text`, plus one for the end.
    offsets: Vec<usize>,
    index: usize,
}

impl Word {
    /// Wraps a word in boundary markers with the cursor on the leading one.
    ///
    /// # Errors
    /// Returns an empty word error if the input is blank after trimming.
    pub fn new(word: &str) -> Result<Self> {
        let word = word.trim();
        if word.is_empty() {
            return Err(Error::empty_word());
        }

        let mut symbols = Vec::with_capacity(word.len() + 2);
        symbols.push(BOUNDARY);
        symbols.extend(word.chars());
        symbols.push(BOUNDARY);

        let mut word = Self {
            symbols,
            text: String::new(),
            offsets: Vec::new(),
            index: 0,
        };
        word.reindex();
        Ok(word)
    }

    /// Moves the cursor forward one symbol.
    ///
    /// Returns false once the cursor reaches a boundary marker, which ends
    /// the sweep. A marker inside the word ends it just like the trailing
    /// one.
    pub fn advance(&mut self) -> bool {
        self.index += 1;
        self.symbols
            .get(self.index)
            .is_some_and(|&symbol| symbol != BOUNDARY)
    }

    /// Puts the cursor back on the leading boundary for the next sweep.
    pub fn rewind(&mut self) {
        self.index = 0;
    }

    /// The current scan position. 0 is the leading boundary.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The symbols including both boundary markers.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The word from the cursor up to, not including, the trailing boundary.
    #[must_use]
    pub fn remainder(&self) -> &str {
        let end = self.symbols.len() - 1;
        if self.index < end {
            &self.text[self.offsets[self.index]..self.offsets[end]]
        } else {
            ""
        }
    }

    /// Number of symbols `target` matches at the cursor, if it matches.
    #[must_use]
    pub fn match_target(&self, target: &Target) -> Option<usize> {
        let remainder = self.remainder();
        target
            .match_len(remainder)
            .map(|bytes| remainder[..bytes].chars().count())
    }

    /// Executes a change on the `matched` symbols at the cursor and
    /// repositions the cursor so the sweep continues after the rewrite.
    pub fn execute(&mut self, change: &Change, matched: usize, policy: CursorPolicy) {
        let at = self.index;

        if change.deletion {
            if matched > 0 {
                self.symbols.drain(at..at + matched);
                self.reindex();
                // Re-examine whatever slid into the gap.
                self.index -= 1;
            }
            return;
        }

        let segment: Vec<char> = if change.replacement.is_empty() {
            self.symbols[at..at + matched].to_vec()
        } else {
            change.replacement.chars().collect()
        };
        if segment.is_empty() {
            return;
        }
        let len = segment.len();

        match self.clamp(change.movement, matched) {
            Shift::Stay => {
                self.symbols.splice(at..at + matched, segment);
                self.index = if matched == 0 { at + len } else { at + len - 1 };
            }
            Shift::Left(distance) => {
                let from = at - distance;
                let displaced: Vec<char> = self.symbols[from..at].to_vec();
                self.symbols
                    .splice(from..at + matched, segment.into_iter().chain(displaced));
                self.index = match policy {
                    _ if matched == 0 => at + len,
                    CursorPolicy::Asymmetric => at,
                    CursorPolicy::Symmetric => at + len - 1,
                };
            }
            Shift::Right(distance) => {
                let end = at + matched + distance;
                let displaced: Vec<char> = self.symbols[at + matched..end].to_vec();
                self.symbols
                    .splice(at..end, displaced.into_iter().chain(segment));
                self.index = at + distance + len - 1;
            }
        }
        self.reindex();
    }

    /// Rebuilds the joined text and offsets from the symbols.
    fn reindex(&mut self) {
        self.text.clear();
        self.offsets.clear();
        for &symbol in &self.symbols {
            self.offsets.push(self.text.len());
            self.text.push(symbol);
        }
        self.offsets.push(self.text.len());
    }

    /// Limits a movement so the moved segment stays between the boundaries.
    fn clamp(&self, movement: i32, matched: usize) -> Shift {
        let distance = usize::try_from(movement.unsigned_abs()).unwrap_or(usize::MAX);
        let limit = match movement.signum() {
            0 => return Shift::Stay,
            -1 => self.index.saturating_sub(1),
            _ => self
                .symbols
                .len()
                .saturating_sub(self.index + matched + 1),
        };

        if distance > limit {
            warn!(movement, limit, word = %self, "movement clamped at word boundary");
        }
        match distance.min(limit) {
            0 => Shift::Stay,
            distance if movement < 0 => Shift::Left(distance),
            distance => Shift::Right(distance),
        }
    }

    /// The word without boundary markers.
    #[must_use]
    pub fn into_string(self) -> String {
        self.to_string()
    }
}

impl Environment for Word {
    fn bounded(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn before(&self) -> Cow<'_, str> {
        if self.index < self.symbols.len() {
            Cow::Borrowed(&self.text[..self.offsets[self.index]])
        } else {
            Cow::Borrowed("")
        }
    }

    fn after(&self, skip: usize) -> Cow<'_, str> {
        let from = self.index + skip;
        if from < self.symbols.len() {
            Cow::Borrowed(&self.text[self.offsets[from]..])
        } else {
            Cow::Borrowed("")
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.symbols.len() - 1;
        f.write_str(&self.text[self.offsets[1]..self.offsets[end]])
    }
}
