//! Parsed world primitives.
//!
//! The loosely-typed output of the lexical parser. Names are whatever the
//! parser produced; the canonicalizer normalizes them.

use std::collections::{BTreeMap, HashMap};

/// An entity seen in the text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entity {
    /// Candidate name
    pub name: String,
    /// Attribute key -> value
    pub attributes: BTreeMap<String, String>,
}

impl Entity {
    /// Creates an entity with no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder method to add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A relation extracted from one sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    /// Subject entity name
    pub subject: Option<String>,
    /// Verb token, or [`POSITION_VERB`](crate::POSITION_VERB)
    pub verb: String,
    /// Object entity name
    pub object: Option<String>,
    /// Spatial preposition
    pub spatial: Option<String>,
}

impl Relation {
    /// Creates a relation.
    #[must_use]
    pub fn new(
        subject: Option<String>,
        verb: impl Into<String>,
        object: Option<String>,
        spatial: Option<String>,
    ) -> Self {
        Self {
            subject,
            verb: verb.into(),
            object,
            spatial,
        }
    }
}

/// Entities (unique by name, in creation order) and relations (in sentence order).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedWorld {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
    relations: Vec<Relation>,
}

impl ParsedWorld {
    /// Creates an empty parsed world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity name if unseen. Returns true if it was new.
    pub fn register(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.entities.len());
        self.entities.push(Entity::new(name));
        true
    }

    /// Inserts an entity, merging attributes into an existing one of the same name.
    pub fn insert_entity(&mut self, entity: Entity) {
        match self.index.get(&entity.name) {
            Some(&idx) => self.entities[idx].attributes.extend(entity.attributes),
            None => {
                self.index.insert(entity.name.clone(), self.entities.len());
                self.entities.push(entity);
            }
        }
    }

    /// Looks up an entity by name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.index.get(name).map(|&idx| &self.entities[idx])
    }

    /// Looks up an entity by name for mutation.
    pub fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.index.get(name).map(|&idx| &mut self.entities[idx])
    }

    /// Appends a relation.
    pub fn push_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Entities in creation order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Relations in sentence order.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns true if nothing was parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relations.is_empty()
    }
}
