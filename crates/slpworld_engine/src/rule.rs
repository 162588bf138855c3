//! Mapping rules.
//!
//! The rule set is closed: three rules, tried in order for every relation
//! whose subject names an existing node.

use slpworld_world::{POSITION_VERB, WorldRelation};

use crate::graph::SlpNode;

// =============================================================================
// Descriptor
// =============================================================================

/// Formats a descriptor: `token(object)` or bare `token`.
#[must_use]
pub fn descriptor(token: &str, object: Option<&str>) -> String {
    match object.filter(|o| !o.is_empty()) {
        Some(object) => format!("{token}({object})"),
        None => token.to_string(),
    }
}

// =============================================================================
// Slot
// =============================================================================

/// Node field a rule writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// `state:` lines
    State,
    /// `position:` lines
    Position,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::State => write!(f, "state"),
            Self::Position => write!(f, "position"),
        }
    }
}

// =============================================================================
// Mapping Rule
// =============================================================================

/// One mapping rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingRule {
    /// `position` marker with a spatial cue: position only, then stop.
    SpatialOnly,
    /// Any non-empty verb becomes a state.
    VerbState,
    /// A spatial cue alongside a verb also becomes a position.
    SpatialModifier,
}

impl MappingRule {
    /// All rules in application order.
    pub const ORDERED: [Self; 3] = [Self::SpatialOnly, Self::VerbState, Self::SpatialModifier];

    /// Rule name used in logs and traces.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SpatialOnly => "spatial-only",
            Self::VerbState => "verb-state",
            Self::SpatialModifier => "spatial-modifier",
        }
    }

    /// Slot this rule writes to.
    #[must_use]
    pub fn slot(self) -> Slot {
        match self {
            Self::VerbState => Slot::State,
            Self::SpatialOnly | Self::SpatialModifier => Slot::Position,
        }
    }

    /// Whether no later rule runs after this one fires.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::SpatialOnly)
    }

    /// The descriptor this rule produces for a relation, if it applies.
    #[must_use]
    pub fn descriptor_for(self, relation: &WorldRelation) -> Option<String> {
        let object = relation.object.as_deref();
        let spatial = relation.spatial.as_deref().filter(|s| !s.is_empty());
        match self {
            Self::SpatialOnly if relation.verb == POSITION_VERB => {
                spatial.map(|s| descriptor(s, object))
            }
            Self::SpatialOnly => None,
            Self::VerbState => {
                (!relation.verb.is_empty()).then(|| descriptor(&relation.verb, object))
            }
            Self::SpatialModifier => spatial.map(|s| descriptor(s, object)),
        }
    }

    /// Writes a descriptor into the rule's slot.
    pub fn write(self, node: &mut SlpNode, descriptor: String) {
        match self.slot() {
            Slot::State => node.states.push(descriptor),
            Slot::Position => node.positions.push(descriptor),
        }
    }
}

impl std::fmt::Display for MappingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_format() {
        assert_eq!(descriptor("on", Some("Table")), "on(Table)");
        assert_eq!(descriptor("running", None), "running");
        assert_eq!(descriptor("running", Some("")), "running");
    }

    #[test]
    fn spatial_only_requires_marker_and_cue() {
        let rel = WorldRelation::new("Cat", POSITION_VERB)
            .with_object("Table")
            .with_spatial("under");
        assert_eq!(
            MappingRule::SpatialOnly.descriptor_for(&rel),
            Some("under(Table)".to_string())
        );

        let no_cue = WorldRelation::new("Cat", POSITION_VERB);
        assert_eq!(MappingRule::SpatialOnly.descriptor_for(&no_cue), None);
        // Without a cue the marker is just another verb.
        assert_eq!(
            MappingRule::VerbState.descriptor_for(&no_cue),
            Some("position".to_string())
        );
    }

    #[test]
    fn verb_rules() {
        let rel = WorldRelation::new("Robot", "carrying")
            .with_object("Box")
            .with_spatial("near");
        assert_eq!(MappingRule::SpatialOnly.descriptor_for(&rel), None);
        assert_eq!(
            MappingRule::VerbState.descriptor_for(&rel),
            Some("carrying(Box)".to_string())
        );
        assert_eq!(
            MappingRule::SpatialModifier.descriptor_for(&rel),
            Some("near(Box)".to_string())
        );
        assert_eq!(MappingRule::VerbState.descriptor_for(&WorldRelation::new("Robot", "")), None);
    }

    #[test]
    fn rule_metadata() {
        assert_eq!(MappingRule::VerbState.slot(), Slot::State);
        assert_eq!(MappingRule::SpatialModifier.slot(), Slot::Position);
        assert!(MappingRule::SpatialOnly.is_terminal());
        assert!(!MappingRule::VerbState.is_terminal());
        assert_eq!(MappingRule::SpatialModifier.to_string(), "spatial-modifier");
        assert_eq!(Slot::Position.to_string(), "position");
    }
}
