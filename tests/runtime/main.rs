//! Integration tests for Layer 3: Runtime
//!
//! Tests for session commands, ruleset files, and the REPL loop driven by
//! a scripted line editor.
