//! SLP emitter.
//!
//! Output is a pure function of the graph: nodes sorted by name, every
//! field group sorted, blocks separated by one blank line, no trailing
//! newline.

use std::fmt::Write;

use slpworld_engine::{SlpGraph, SlpNode};
use slpworld_foundation::Result;

use crate::{CLOSURE_KEY, POSITION_KEY, STATE_KEY};

/// Configuration for emitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Number of spaces before each body line.
    pub indent_width: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl EmitConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the indent width.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

/// Emits a graph as SLP text with the default configuration.
///
/// # Errors
///
/// Returns [`ErrorKind::Format`](slpworld_foundation::ErrorKind::Format) if
/// writing to the output buffer fails.
pub fn emit(graph: &SlpGraph) -> Result<String> {
    emit_with_config(graph, &EmitConfig::default())
}

/// Emits a graph as SLP text.
///
/// # Errors
///
/// Returns [`ErrorKind::Format`](slpworld_foundation::ErrorKind::Format) if
/// writing to the output buffer fails.
pub fn emit_with_config(graph: &SlpGraph, config: &EmitConfig) -> Result<String> {
    let mut emitter = Emitter::new(config);
    for (index, node) in graph.nodes().enumerate() {
        if index > 0 {
            emitter.output.push_str("\n\n");
        }
        emitter.node(node)?;
    }

    tracing::debug!(
        nodes = graph.len(),
        bytes = emitter.output.len(),
        "emitted slp"
    );

    Ok(emitter.output)
}

/// Emits a single node block.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
pub fn emit_node(node: &SlpNode, config: &EmitConfig) -> Result<String> {
    let mut emitter = Emitter::new(config);
    emitter.node(node)?;
    Ok(emitter.output)
}

// =============================================================================
// Emitter
// =============================================================================

/// Emitter state.
struct Emitter<'a> {
    config: &'a EmitConfig,
    output: String,
}

impl<'a> Emitter<'a> {
    fn new(config: &'a EmitConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn node(&mut self, node: &SlpNode) -> Result<()> {
        write!(self.output, "node {} {{", node.name)?;

        // BTreeMap iteration is already key order.
        for (key, value) in &node.attributes {
            self.line(key, value)?;
        }
        self.group(STATE_KEY, &node.states)?;
        self.group(POSITION_KEY, &node.positions)?;
        self.group(CLOSURE_KEY, &node.closures)?;

        self.output.push_str("\n}");
        Ok(())
    }

    fn group(&mut self, key: &str, values: &[String]) -> Result<()> {
        let mut sorted: Vec<&str> = values.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        for value in sorted {
            self.line(key, value)?;
        }
        Ok(())
    }

    fn line(&mut self, key: &str, value: &str) -> Result<()> {
        write!(
            self.output,
            "\n{:indent$}{key}: {value}",
            "",
            indent = self.config.indent_width
        )?;
        Ok(())
    }
}
