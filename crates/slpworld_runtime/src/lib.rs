//! Pipeline driver and CLI for the slpworld interpreter.
//!
//! This crate provides:
//! - [`interpret`] - Text in, SLP out, with default configuration
//! - [`Interpreter`] - A configured pipeline with an attached [`Tracer`](slpworld_debug::Tracer)
//! - [`InterpretError`] - Stage-tagged pipeline failures
//!
//! # Example
//!
//! ```
//! let slp = slpworld_runtime::interpret("The cat is under the table.").unwrap();
//! assert_eq!(slp, "node Cat {\n    position: under(Table)\n}\n\nnode Table {\n}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod interpreter;

pub use config::InterpreterConfig;
pub use error::InterpretError;
pub use interpreter::{Interpreter, interpret};
