//! Core types shared by every layer of the SLP world interpreter.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`text`] - The naive singularization and capitalization helpers used
//!   by both the parser and the canonicalizer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod text;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use text::{capitalize, singularize};
