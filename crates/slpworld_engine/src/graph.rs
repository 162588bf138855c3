//! SLP graph types.

use std::collections::BTreeMap;

/// One SLP node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlpNode {
    /// Canonical entity name (graph key)
    pub name: String,
    /// Attribute key -> value
    pub attributes: BTreeMap<String, String>,
    /// State descriptors, duplicates allowed
    pub states: Vec<String>,
    /// Position descriptors, duplicates allowed
    pub positions: Vec<String>,
    /// Reserved for closure rules; the mapper never fills it
    pub closures: Vec<String>,
}

impl SlpNode {
    /// Creates an empty node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder method to add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder method to add a state descriptor.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.states.push(state.into());
        self
    }

    /// Builder method to add a position descriptor.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.positions.push(position.into());
        self
    }

    /// Builder method to add a closure descriptor.
    #[must_use]
    pub fn with_closure(mut self, closure: impl Into<String>) -> Self {
        self.closures.push(closure.into());
        self
    }

    /// Returns a copy with every descriptor list sorted.
    ///
    /// Two nodes that only differ in descriptor order are equal once sorted.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut node = self.clone();
        node.states.sort();
        node.positions.sort();
        node.closures.sort();
        node
    }
}

/// Nodes keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlpGraph {
    nodes: BTreeMap<String, SlpNode>,
}

impl SlpGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, replacing any node with the same name.
    ///
    /// Returns the replaced node.
    pub fn insert(&mut self, node: SlpNode) -> Option<SlpNode> {
        self.nodes.insert(node.name.clone(), node)
    }

    /// Looks up a node.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SlpNode> {
        self.nodes.get(name)
    }

    /// Looks up a node for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut SlpNode> {
        self.nodes.get_mut(name)
    }

    /// Returns true if a node with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Iterates nodes in name order.
    pub fn nodes(&self) -> impl Iterator<Item = &SlpNode> {
        self.nodes.values()
    }

    /// Node names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a copy with every node's descriptor lists sorted.
    #[must_use]
    pub fn sorted(&self) -> Self {
        Self {
            nodes: self
                .nodes
                .iter()
                .map(|(name, node)| (name.clone(), node.sorted()))
                .collect(),
        }
    }
}

impl FromIterator<SlpNode> for SlpGraph {
    fn from_iter<I: IntoIterator<Item = SlpNode>>(iter: I) -> Self {
        let mut graph = Self::new();
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}
