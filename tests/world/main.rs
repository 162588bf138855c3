//! Integration tests for the slpworld_world crate.
//!
//! Tests for canonicalization and extraction into the world model.

mod canonical_tests;
mod extract_tests;
