//! SLP reader.
//!
//! Accepts exactly the block shape the emitter writes:
//!
//! ```text
//! node <Name> {
//!     <key>: <value>
//! }
//! ```
//!
//! Blank lines between blocks are ignored. `state`, `position` and
//! `closure` lines fill the node's descriptor lists; any other key is an
//! attribute. An attribute keyed `state` (from a state adjective such as
//! `open`) is indistinguishable from a state line and reads back as one.

use slpworld_engine::{SlpGraph, SlpNode};
use slpworld_foundation::{Error, ErrorContext, Result};

use crate::{CLOSURE_KEY, POSITION_KEY, STATE_KEY};

/// Parses SLP text into a graph.
///
/// # Errors
///
/// Returns [`ErrorKind::Syntax`](slpworld_foundation::ErrorKind::Syntax)
/// with a 1-indexed line number on malformed input.
pub fn read(text: &str) -> Result<SlpGraph> {
    let mut reader = Reader::default();
    for (index, line) in text.lines().enumerate() {
        reader.line(index + 1, line)?;
    }
    let graph = reader.finish()?;

    tracing::debug!(nodes = graph.len(), "read slp");
    Ok(graph)
}

fn syntax(line: usize, message: impl Into<String>, fragment: &str) -> Error {
    Error::syntax(line, message).with_context(
        ErrorContext::new()
            .with_stage("read")
            .with_position(line)
            .with_fragment(fragment),
    )
}

/// Parses a `node <Name> {` header, returning the name.
fn header(line: usize, text: &str) -> Result<String> {
    let trimmed = text.trim();
    let name = trimmed
        .strip_prefix("node ")
        .and_then(|rest| rest.strip_suffix('{'))
        .ok_or_else(|| syntax(line, "expected `node <Name> {`", text))?
        .trim();

    if name.is_empty() {
        return Err(syntax(line, "node header without a name", text));
    }
    if name.contains(char::is_whitespace) {
        return Err(syntax(line, "node name contains whitespace", text));
    }
    Ok(name.to_string())
}

// =============================================================================
// Reader
// =============================================================================

#[derive(Default)]
struct Reader {
    graph: SlpGraph,
    /// Open block and the line its header was on
    open: Option<(SlpNode, usize)>,
}

impl Reader {
    fn line(&mut self, line: usize, text: &str) -> Result<()> {
        let Some((node, _)) = self.open.as_mut() else {
            if !text.trim().is_empty() {
                self.open = Some((SlpNode::new(header(line, text)?), line));
            }
            return Ok(());
        };

        let body = text.trim_start();
        if body.trim_end() == "}" {
            return self.close(line);
        }
        if body.trim().is_empty() {
            return Ok(());
        }

        let (key, value) = body
            .split_once(": ")
            .ok_or_else(|| syntax(line, "expected `key: value`", text))?;
        if key.is_empty() {
            return Err(syntax(line, "empty key", text));
        }

        match key {
            STATE_KEY => node.states.push(value.to_string()),
            POSITION_KEY => node.positions.push(value.to_string()),
            CLOSURE_KEY => node.closures.push(value.to_string()),
            _ => {
                node.attributes.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    fn close(&mut self, line: usize) -> Result<()> {
        let Some((node, header_line)) = self.open.take() else {
            return Err(syntax(line, "`}` outside a block", "}"));
        };
        if self.graph.contains(&node.name) {
            return Err(syntax(
                header_line,
                format!("duplicate node `{}`", node.name),
                &node.name,
            ));
        }
        self.graph.insert(node);
        Ok(())
    }

    fn finish(self) -> Result<SlpGraph> {
        match self.open {
            Some((node, header_line)) => Err(syntax(
                header_line,
                format!("unterminated block for node `{}`", node.name),
                &node.name,
            )),
            None => Ok(self.graph),
        }
    }
}
