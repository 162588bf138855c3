//! Integration tests for the slpworld_language crate.
//!
//! Tests for SLP emission and reading.

mod emit_tests;
mod reader_tests;
