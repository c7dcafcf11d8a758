//! Core error types and notation symbols for Soundshift.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`symbols`] - The reserved characters of the sound change notation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod symbols;

pub use error::{Error, ErrorContext, ErrorKind, Result};
