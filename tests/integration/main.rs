//! End-to-end tests for the slpworld pipeline.
//!
//! Tests that drive text through every layer via the runtime.

mod errors;
mod properties;
mod scenes;
