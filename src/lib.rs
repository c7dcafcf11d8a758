//! Soundshift - Rule-based sound change engine
//!
//! This crate re-exports all layers of the Soundshift system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: soundshift_runtime    — Session, REPL, CLI
//! Layer 2: soundshift_engine     — Word cursor, sweeps, engine instance
//! Layer 1: soundshift_notation   — Category table, clause and rule compilers
//! Layer 0: soundshift_foundation — Errors and notation symbols
//! ```
//!
//! # Example
//!
//! ```
//! use soundshift::Engine;
//!
//! let mut engine = Engine::new();
//! engine.add_rule("a>").unwrap();
//! assert_eq!(engine.apply("banana").unwrap(), "bnn");
//! ```

pub use soundshift_engine as engine;
pub use soundshift_foundation as foundation;
pub use soundshift_notation as notation;
pub use soundshift_runtime as runtime;

pub use soundshift_engine::{Engine, EngineConfig};
pub use soundshift_foundation::{Error, Result};
