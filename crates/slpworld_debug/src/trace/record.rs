//! Trace event and record types.
//!
//! This module defines the events that can be traced during a pipeline run.

// =============================================================================
// Pipeline Stage
// =============================================================================

/// Stage of a pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Sentence splitting and lexical analysis.
    Parse,
    /// Canonicalization into a world model.
    Extract,
    /// Rule-based mapping to SLP nodes.
    Map,
    /// Serialization to SLP text.
    Emit,
}

impl PipelineStage {
    /// All stages in execution order.
    pub const ALL: [Self; 4] = [Self::Parse, Self::Extract, Self::Map, Self::Emit];
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse => write!(f, "parse"),
            Self::Extract => write!(f, "extract"),
            Self::Map => write!(f, "map"),
            Self::Emit => write!(f, "emit"),
        }
    }
}

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during a pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A run has started.
    RunStart {
        /// The run number.
        run: u64,
        /// Input length in bytes.
        input_len: usize,
    },

    /// A run has ended.
    RunEnd {
        /// The run number.
        run: u64,
        /// Whether the run produced output.
        success: bool,
    },

    /// A stage has started.
    StageStart {
        /// The stage that started.
        stage: PipelineStage,
    },

    /// A stage has ended.
    StageEnd {
        /// The stage that ended.
        stage: PipelineStage,
        /// Whether the stage succeeded.
        success: bool,
    },

    /// A canonical entity entered the world model.
    EntityRegistered {
        /// Canonical entity name.
        name: String,
    },

    /// A mapping rule wrote a descriptor to a node.
    RelationEmitted {
        /// The node written to.
        node: String,
        /// The rule that fired.
        rule: String,
        /// The descriptor written.
        descriptor: String,
    },

    /// A relation was dropped because its subject is missing or unknown.
    RelationSkipped {
        /// Index of the relation in the world model.
        relation: usize,
        /// The subject, if any.
        subject: Option<String>,
        /// Why it was dropped.
        reason: String,
    },

    /// A node block was written.
    NodeEmitted {
        /// Node name.
        name: String,
        /// Number of body lines.
        lines: usize,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::RunStart { .. } => "run-start",
            Self::RunEnd { .. } => "run-end",
            Self::StageStart { .. } => "stage-start",
            Self::StageEnd { .. } => "stage-end",
            Self::EntityRegistered { .. } => "entity-registered",
            Self::RelationEmitted { .. } => "relation-emitted",
            Self::RelationSkipped { .. } => "relation-skipped",
            Self::NodeEmitted { .. } => "node-emitted",
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Unique record ID within the tracer's lifetime.
    pub id: u64,
    /// The run during which this event occurred.
    pub run: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, run: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            run,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
