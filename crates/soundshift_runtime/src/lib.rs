//! REPL and CLI for Soundshift.
//!
//! This crate provides:
//! - [`Session`] - An engine plus the commands that drive it interactively
//! - [`Repl`] - Interactive read-eval-print loop over a [`LineEditor`]
//! - The `soundshift` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::NotationHighlighter;
pub use repl::Repl;
pub use session::{Command, Session};
