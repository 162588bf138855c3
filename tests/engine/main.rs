//! Integration tests for the slpworld_engine crate.
//!
//! Tests for mapping world models to SLP graphs.

mod mapping_tests;
