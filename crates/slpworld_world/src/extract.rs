//! `ParsedWorld` → `WorldModel`.
//!
//! Normalizes names, attribute keys, verbs and spatial cues. Relations are
//! not filtered against the entity list.

use slpworld_foundation::{Error, ErrorContext, Result};
use slpworld_parser::{ParsedWorld, Relation};

use crate::canonical::{
    canonicalize_attribute_key, canonicalize_name, canonicalize_spatial, canonicalize_verb,
};
use crate::model::{WorldEntity, WorldModel, WorldRelation};

/// Converts a parsed world into a canonical world model.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyName`](slpworld_foundation::ErrorKind::EmptyName)
/// if a non-empty entity name canonicalizes to nothing (a bare `"s"`).
pub fn extract(parsed: &ParsedWorld) -> Result<WorldModel> {
    let mut model = WorldModel::new();

    for (position, entity) in parsed.entities().iter().enumerate() {
        let name = canonicalize_name(&entity.name);
        if name.is_empty() && !entity.name.trim().is_empty() {
            return Err(Error::empty_name(&entity.name).with_context(
                ErrorContext::new()
                    .with_stage("extract")
                    .with_position(position),
            ));
        }

        let attributes = entity
            .attributes
            .iter()
            .map(|(k, v)| (canonicalize_attribute_key(k), v.clone()))
            .collect();

        model.upsert_entity(WorldEntity { name, attributes });
    }

    for relation in parsed.relations() {
        model.push_relation(canonicalize_relation(relation));
    }

    tracing::debug!(
        entities = model.entities().len(),
        relations = model.relations().len(),
        "extracted world model"
    );

    Ok(model)
}

/// Canonicalizes one relation. Absent or empty names become `None`.
#[must_use]
pub fn canonicalize_relation(relation: &Relation) -> WorldRelation {
    let name = |n: &Option<String>| {
        n.as_deref()
            .filter(|n| !n.is_empty())
            .map(canonicalize_name)
    };

    WorldRelation {
        subject: name(&relation.subject),
        verb: canonicalize_verb(&relation.verb),
        object: name(&relation.object),
        spatial: canonicalize_spatial(relation.spatial.as_deref()),
    }
}
