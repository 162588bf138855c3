//! SLP text for slpworld graphs.
//!
//! This crate provides:
//! - [`emit`] - Deterministic serialization of an [`SlpGraph`](slpworld_engine::SlpGraph)
//! - [`read`] - Parses emitted SLP text back into a graph
//!
//! # Example
//!
//! ```
//! use slpworld_engine::{SlpGraph, SlpNode};
//! use slpworld_language::{emit, read};
//!
//! let graph: SlpGraph = [SlpNode::new("Cat").with_state("sleeping")]
//!     .into_iter()
//!     .collect();
//! let text = emit(&graph).unwrap();
//! assert_eq!(text, "node Cat {\n    state: sleeping\n}");
//! assert_eq!(read(&text).unwrap(), graph);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod emit;
pub mod reader;

pub use emit::{EmitConfig, emit, emit_node, emit_with_config};
pub use reader::read;

/// Key for state lines.
pub const STATE_KEY: &str = "state";
/// Key for position lines.
pub const POSITION_KEY: &str = "position";
/// Key for closure lines.
pub const CLOSURE_KEY: &str = "closure";
