//! Tracing system for pipeline runs.
//!
//! Records stage boundaries, registered entities, fired and skipped
//! relations and emitted nodes, with zero overhead when disabled.
//! Supports both human-readable and JSON output formats.
//!
//! # Example
//!
//! ```
//! use slpworld_debug::{PipelineStage, Tracer, TracerConfig};
//!
//! let mut tracer = Tracer::new(TracerConfig::new().enabled());
//! tracer.run_start(11);
//! tracer.stage_start(PipelineStage::Parse);
//! tracer.stage_end(PipelineStage::Parse, true);
//! tracer.run_end(true);
//! assert_eq!(tracer.buffer().len(), 4);
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::TraceBuffer;
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{PipelineStage, TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            json_format: false,
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records pipeline events.
///
/// The `record` method returns immediately if tracing is off.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_run: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_run: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new().with_timestamps(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_run, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Starts a new run and records its start event.
    #[inline]
    pub fn run_start(&mut self, input_len: usize) {
        self.current_run += 1;
        let run = self.current_run;
        self.record(TraceEvent::RunStart { run, input_len });
    }

    /// Records the end of the current run.
    #[inline]
    pub fn run_end(&mut self, success: bool) {
        let run = self.current_run;
        self.record(TraceEvent::RunEnd { run, success });
    }

    /// Records a stage start event.
    #[inline]
    pub fn stage_start(&mut self, stage: PipelineStage) {
        self.record(TraceEvent::StageStart { stage });
    }

    /// Records a stage end event.
    #[inline]
    pub fn stage_end(&mut self, stage: PipelineStage, success: bool) {
        self.record(TraceEvent::StageEnd { stage, success });
    }

    /// Records a canonical entity.
    #[inline]
    pub fn entity_registered(&mut self, name: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::EntityRegistered {
                name: name.to_string(),
            });
        }
    }

    /// Records a descriptor written by a mapping rule.
    #[inline]
    pub fn relation_emitted(&mut self, node: &str, rule: &str, descriptor: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::RelationEmitted {
                node: node.to_string(),
                rule: rule.to_string(),
                descriptor: descriptor.to_string(),
            });
        }
    }

    /// Records a dropped relation.
    #[inline]
    pub fn relation_skipped(&mut self, relation: usize, subject: Option<&str>, reason: &str) {
        if self.is_enabled() {
            self.record(TraceEvent::RelationSkipped {
                relation,
                subject: subject.map(str::to_string),
                reason: reason.to_string(),
            });
        }
    }

    /// Records an emitted node block.
    #[inline]
    pub fn node_emitted(&mut self, name: &str, lines: usize) {
        if self.is_enabled() {
            self.record(TraceEvent::NodeEmitted {
                name: name.to_string(),
                lines,
            });
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Tests
// =============================================================================
