//! Canonical world model for the SLP world interpreter.
//!
//! This crate provides:
//! - [`WorldModel`] - Unique canonical entities plus normalized relations
//! - [`canonical`] - Name, attribute key, verb and spatial normalization
//! - [`extract`] - `ParsedWorld` to `WorldModel` conversion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonical;
pub mod extract;
pub mod model;

pub use extract::extract;
pub use model::{WorldEntity, WorldModel, WorldRelation};
pub use slpworld_parser::POSITION_VERB;
