//! Rule-based mapping from canonical world models to SLP graphs.
//!
//! This crate provides:
//! - [`SlpGraph`] / [`SlpNode`] - The typed node graph the emitter serializes
//! - [`MappingRule`] - The fixed, ordered mapping rule table
//! - [`Mapper`] - Applies the rules and keeps a log of what fired or was skipped

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod mapper;
pub mod rule;

pub use graph::{SlpGraph, SlpNode};
pub use mapper::{Mapper, MappingReport, RuleApplication, SkipReason, SkippedRelation, map_to_slp};
pub use rule::{MappingRule, Slot, descriptor};
