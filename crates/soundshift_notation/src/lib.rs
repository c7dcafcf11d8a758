//! Sound change notation compiler for Soundshift.
//!
//! Turns rule text such as `K>@2/#_n!_a/x` into matchable structures.
//!
//! # Architecture
//!
//! ```text
//! "K>e/_n"
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ RULE GRAMMAR    │  → target "K", change "e", condition "_n"
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ CATEGORY        │  → K ⇒ (a|b|c)
//! │ EXPANSION       │
//! └─────────────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ CLAUSE          │  → Target ^((a|b|c)), Change "e", Condition [_ ^n]
//! │ COMPILERS       │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`category`] - Category table and pattern expansion
//! - [`target`] - What to match at the cursor
//! - [`change`] - What to change to
//! - [`condition`] - Environments gating a change
//! - [`rule`] - The five-part rule grammar
//! - [`ruleset`] - Line-oriented ruleset sources

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod change;
pub mod condition;
pub mod rule;
pub mod ruleset;
pub mod target;

mod pattern;

// Re-export main types for convenience
pub use category::{Category, CategoryTable};
pub use change::{Change, ChangeCompiler};
pub use condition::{Clause, Condition, ConditionCompiler, Environment};
pub use rule::{Rule, RuleCompiler};
pub use ruleset::{Statement, parse_ruleset};
pub use target::{Target, TargetCompiler};
