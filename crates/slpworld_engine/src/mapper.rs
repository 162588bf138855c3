//! `WorldModel` → `SlpGraph`.
//!
//! One node per entity. Relations are routed through the rule table;
//! relations whose subject is missing or unknown are skipped and logged,
//! never raised.

use slpworld_foundation::{Error, ErrorContext, Result};
use slpworld_world::WorldModel;

use crate::graph::{SlpGraph, SlpNode};
use crate::rule::MappingRule;

/// Maps a world model with a fresh [`Mapper`].
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyName`](slpworld_foundation::ErrorKind::EmptyName)
/// if an entity has an empty name.
pub fn map_to_slp(world: &WorldModel) -> Result<SlpGraph> {
    Mapper::new().map(world)
}

// =============================================================================
// Mapping Report
// =============================================================================

/// A rule that fired for a relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleApplication {
    /// Index of the relation in the world model
    pub relation: usize,
    /// Which rule fired
    pub rule: MappingRule,
    /// Node written to
    pub node: String,
    /// Descriptor written
    pub descriptor: String,
}

/// Why a relation was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The relation had no subject
    MissingSubject,
    /// The subject names no entity
    UnknownSubject,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSubject => write!(f, "missing subject"),
            Self::UnknownSubject => write!(f, "unknown subject"),
        }
    }
}

/// A relation dropped by the safety fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRelation {
    /// Index of the relation in the world model
    pub relation: usize,
    /// The subject, if it had one
    pub subject: Option<String>,
    /// Why it was dropped
    pub reason: SkipReason,
}

/// Log of one mapping run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingReport {
    /// Rules that fired, in order
    pub applied: Vec<RuleApplication>,
    /// Relations that were dropped, in order
    pub skipped: Vec<SkippedRelation>,
}

// =============================================================================
// Mapper
// =============================================================================

/// Applies [`MappingRule::ORDERED`] to every relation of a world model.
#[derive(Clone, Debug, Default)]
pub struct Mapper {
    report: MappingReport,
}

impl Mapper {
    /// Creates a new mapper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The log of the most recent [`map`](Self::map) call.
    #[must_use]
    pub fn report(&self) -> &MappingReport {
        &self.report
    }

    /// Takes the log of the most recent call, leaving an empty one.
    pub fn take_report(&mut self) -> MappingReport {
        std::mem::take(&mut self.report)
    }

    /// Maps a world model to an SLP graph.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity has an empty name.
    pub fn map(&mut self, world: &WorldModel) -> Result<SlpGraph> {
        self.report = MappingReport::default();
        let mut graph = SlpGraph::new();

        for (position, entity) in world.entities().iter().enumerate() {
            if entity.name.is_empty() {
                return Err(Error::empty_name("").with_context(
                    ErrorContext::new().with_stage("map").with_position(position),
                ));
            }
            let mut node = SlpNode::new(&entity.name);
            node.attributes.clone_from(&entity.attributes);
            graph.insert(node);
        }

        for (index, relation) in world.relations().iter().enumerate() {
            let Some(subject) = relation.subject.as_deref() else {
                self.skip(index, None, SkipReason::MissingSubject);
                continue;
            };
            let Some(node) = graph.get_mut(subject) else {
                self.skip(index, Some(subject), SkipReason::UnknownSubject);
                continue;
            };

            for rule in MappingRule::ORDERED {
                let Some(descriptor) = rule.descriptor_for(relation) else {
                    continue;
                };
                rule.write(node, descriptor.clone());
                self.report.applied.push(RuleApplication {
                    relation: index,
                    rule,
                    node: subject.to_string(),
                    descriptor,
                });
                if rule.is_terminal() {
                    break;
                }
            }
        }

        tracing::debug!(
            nodes = graph.len(),
            applied = self.report.applied.len(),
            skipped = self.report.skipped.len(),
            "mapped world model"
        );

        Ok(graph)
    }

    fn skip(&mut self, relation: usize, subject: Option<&str>, reason: SkipReason) {
        tracing::debug!(relation, subject = ?subject, %reason, "skipping relation");
        self.report.skipped.push(SkippedRelation {
            relation,
            subject: subject.map(str::to_string),
            reason,
        });
    }
}
