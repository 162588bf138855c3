//! Pipeline tracing for slpworld.
//!
//! This crate provides:
//! - [`Tracer`] - Records stage boundaries and per-entity/per-relation events
//! - [`TraceBuffer`] - Bounded ring buffer of trace records
//! - [`HumanFormatter`] / [`JsonFormatter`] - Trace output formats
//! - [`ObservabilityConfig`] - Presets for turning tracing on

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod trace;

pub use config::ObservabilityConfig;
pub use trace::{
    HumanFormatter, JsonFormatter, PipelineStage, TraceBuffer, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
