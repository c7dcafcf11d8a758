//! Integration tests for Layer 1: Notation
//!
//! Tests for categories, clause compilers, rule compilation, and ruleset
//! sources.

mod ruleset;
mod targets;
