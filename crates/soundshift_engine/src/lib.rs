//! Word cursor, rule application, and engine instance for Soundshift.
//!
//! This crate provides:
//! - [`Word`] - A boundary-delimited word with a movable scan position
//! - [`sweep`] - One left-to-right pass of a rule over a word
//! - [`Engine`] - Registered categories and rules, applied to words
//! - [`EngineConfig`] - Cursor policy and the sweep kill switch
//! - [`Derivation`] - A record of how a word changed, rule by rule

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;
pub mod sweep;
pub mod trace;
pub mod word;

pub use config::{CursorPolicy, EngineConfig};
pub use engine::Engine;
pub use sweep::sweep;
pub use trace::{Derivation, DerivationFormatter, DerivationStep, HumanFormatter};
pub use word::Word;
