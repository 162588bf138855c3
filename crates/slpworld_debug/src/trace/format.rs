//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = format!("R{:04} ", record.run);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::RunStart { run, input_len } => {
                format!("=== RUN {run} START ({input_len} bytes) ===")
            }
            TraceEvent::RunEnd { run, success } => {
                let status = if *success { "OK" } else { "FAILED" };
                format!("=== RUN {run} END ({status}) ===")
            }
            TraceEvent::StageStart { stage } => format!("  >> {stage}"),
            TraceEvent::StageEnd { stage, success } => {
                if *success {
                    format!("  << {stage}")
                } else {
                    format!("  << {stage} FAILED")
                }
            }
            TraceEvent::EntityRegistered { name } => format!("    ENTITY {name}"),
            TraceEvent::RelationEmitted {
                node,
                rule,
                descriptor,
            } => format!("    EMIT ({rule}) {node} {descriptor}"),
            TraceEvent::RelationSkipped {
                relation,
                subject,
                reason,
            } => {
                let subject = subject.as_deref().unwrap_or("-");
                format!("    SKIP #{relation} {subject}: {reason}")
            }
            TraceEvent::NodeEmitted { name, lines } => {
                format!("    NODE {name} ({lines} lines)")
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as single-line JSON objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats a string as a JSON string literal.
    fn string(s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('"');
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                }
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let event_data = match &record.event {
            TraceEvent::RunStart { input_len, .. } => format!("\"input_len\":{input_len}"),
            TraceEvent::RunEnd { success, .. } => format!("\"success\":{success}"),
            TraceEvent::StageStart { stage } => format!("\"stage\":\"{stage}\""),
            TraceEvent::StageEnd { stage, success } => {
                format!("\"stage\":\"{stage}\",\"success\":{success}")
            }
            TraceEvent::EntityRegistered { name } => format!("\"name\":{}", Self::string(name)),
            TraceEvent::RelationEmitted {
                node,
                rule,
                descriptor,
            } => format!(
                "\"node\":{},\"rule\":{},\"descriptor\":{}",
                Self::string(node),
                Self::string(rule),
                Self::string(descriptor)
            ),
            TraceEvent::RelationSkipped {
                relation,
                subject,
                reason,
            } => {
                let subject = subject
                    .as_deref()
                    .map_or_else(|| "null".to_string(), Self::string);
                format!(
                    "\"relation\":{relation},\"subject\":{subject},\"reason\":{}",
                    Self::string(reason)
                )
            }
            TraceEvent::NodeEmitted { name, lines } => {
                format!("\"name\":{},\"lines\":{lines}", Self::string(name))
            }
        };

        format!(
            "{{\"id\":{},\"run\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id,
            record.run,
            record.timestamp_ns,
            record.event_type(),
            event_data
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
