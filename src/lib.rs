//! slpworld - Scene sentences to SLP
//!
//! This crate re-exports all layers of the slpworld system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: slpworld_runtime    — Pipeline driver, CLI
//! Layer 5: slpworld_debug      — Pipeline tracing
//! Layer 4: slpworld_language   — SLP emitter and reader
//! Layer 3: slpworld_engine     — SLP graph, rule-based mapper
//! Layer 2: slpworld_world      — Canonical world model, extraction
//! Layer 1: slpworld_parser     — Sentence splitting, lexical analysis
//! Layer 0: slpworld_foundation — Error types, word-shape helpers
//! ```

pub use slpworld_debug as debug;
pub use slpworld_engine as engine;
pub use slpworld_foundation as foundation;
pub use slpworld_language as language;
pub use slpworld_parser as parser;
pub use slpworld_runtime as runtime;
pub use slpworld_world as world;

pub use slpworld_runtime::{InterpretError, Interpreter, InterpreterConfig, interpret};
