//! Canonical world model types.

use std::collections::BTreeMap;

/// An entity with a canonical name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldEntity {
    /// Canonical name: singular, capitalized
    pub name: String,
    /// Normalized attribute key -> value
    pub attributes: BTreeMap<String, String>,
}

impl WorldEntity {
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

/// A normalized relation.
///
/// Subject and object are not checked against the entity list here; the
/// mapper drops relations whose subject is unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldRelation {
    /// Subject entity name
    pub subject: Option<String>,
    /// Lowercase verb
    pub verb: String,
    /// Object entity name
    pub object: Option<String>,
    /// Lowercase spatial cue, words joined by `_`
    pub spatial: Option<String>,
}

impl WorldRelation {
    /// Creates a relation with a subject and verb.
    #[must_use]
    pub fn new(subject: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            verb: verb.into(),
            object: None,
            spatial: None,
        }
    }

    /// Builder method to set the object.
    #[must_use]
    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Builder method to set the spatial cue.
    #[must_use]
    pub fn with_spatial(mut self, spatial: impl Into<String>) -> Self {
        self.spatial = Some(spatial.into());
        self
    }

    /// Builder method to clear the subject.
    #[must_use]
    pub fn without_subject(mut self) -> Self {
        self.subject = None;
        self
    }
}

/// Unique canonical entities plus relations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldModel {
    entities: Vec<WorldEntity>,
    relations: Vec<WorldRelation>,
}

impl WorldModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model from parts.
    ///
    /// Entities sharing a name merge into the first occurrence's slot with
    /// the last occurrence's attributes.
    #[must_use]
    pub fn from_parts(entities: Vec<WorldEntity>, relations: Vec<WorldRelation>) -> Self {
        let mut model = Self::new();
        for entity in entities {
            model.upsert_entity(entity);
        }
        model.relations = relations;
        model
    }

    /// Inserts an entity or replaces the attributes of an existing one.
    pub fn upsert_entity(&mut self, entity: WorldEntity) {
        match self.entities.iter_mut().find(|e| e.name == entity.name) {
            Some(existing) => existing.attributes = entity.attributes,
            None => self.entities.push(entity),
        }
    }

    /// Appends a relation.
    pub fn push_relation(&mut self, relation: WorldRelation) {
        self.relations.push(relation);
    }

    /// Entities in first-seen order.
    #[must_use]
    pub fn entities(&self) -> &[WorldEntity] {
        &self.entities
    }

    /// Relations in input order.
    #[must_use]
    pub fn relations(&self) -> &[WorldRelation] {
        &self.relations
    }

    /// Looks up an entity by canonical name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&WorldEntity> {
        self.entities.iter().find(|e| e.name == name)
    }
}
