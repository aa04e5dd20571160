//! In-memory linked-data dataset model.
//!
//! A [`Dataset`] holds a set of [`Entity`] nodes keyed by IRI, each
//! carrying an ordered list of predicate/object statements. Lookup
//! absence is the only failure signal at this layer: none of the read
//! operations return `Result`, and a missing entity or predicate is an
//! ordinary `None`.

/// The object position of a statement: a string literal or a reference
/// to another entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A plain string literal.
    Literal(String),
    /// An IRI reference to another entity.
    Ref(String),
}

impl Object {
    /// Returns the literal value, or `None` for references.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Object::Literal(s) => Some(s),
            Object::Ref(_) => None,
        }
    }

    /// Returns the referenced IRI, or `None` for literals.
    #[must_use]
    pub fn as_ref_iri(&self) -> Option<&str> {
        match self {
            Object::Ref(iri) => Some(iri),
            Object::Literal(_) => None,
        }
    }
}

/// A node in the dataset: a subject IRI plus its statements.
///
/// Statements keep insertion order so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: String,
    statements: Vec<(String, Object)>,
}

impl Entity {
    /// Creates an entity with no statements.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            statements: Vec::new(),
        }
    }

    /// The subject IRI of this entity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the first literal object asserted for `predicate`, or
    /// `None` if the predicate is absent or only holds references.
    #[must_use]
    pub fn scalar(&self, predicate: &str) -> Option<&str> {
        self.statements
            .iter()
            .filter(|(p, _)| p == predicate)
            .find_map(|(_, o)| o.as_literal())
    }

    /// Returns the identifier of the entity referenced by `predicate`.
    ///
    /// Profile documents in the wild assert reference properties either
    /// as IRI objects or as plain string literals holding the target
    /// identifier; both forms are accepted here.
    #[must_use]
    pub fn reference(&self, predicate: &str) -> Option<&str> {
        self.statements
            .iter()
            .filter(|(p, _)| p == predicate)
            .find_map(|(_, o)| match o {
                Object::Ref(iri) => Some(iri.as_str()),
                Object::Literal(s) => Some(s.as_str()),
            })
    }

    /// All statements of this entity in insertion order.
    #[must_use]
    pub fn statements(&self) -> &[(String, Object)] {
        &self.statements
    }

    /// Appends a statement.
    pub fn push(&mut self, predicate: impl Into<String>, object: Object) {
        self.statements.push((predicate.into(), object));
    }

    /// Sets a literal for `predicate`, replacing any existing statements
    /// with that predicate.
    pub fn set_scalar(&mut self, predicate: &str, value: impl Into<String>) {
        self.statements.retain(|(p, _)| p != predicate);
        self.statements
            .push((predicate.to_owned(), Object::Literal(value.into())));
    }

    /// Sets a reference for `predicate`, replacing any existing
    /// statements with that predicate.
    pub fn set_reference(&mut self, predicate: &str, target: impl Into<String>) {
        self.statements.retain(|(p, _)| p != predicate);
        self.statements
            .push((predicate.to_owned(), Object::Ref(target.into())));
    }
}

/// An owned collection of entities, keyed by IRI.
///
/// Entities keep first-seen order so a parsed document re-serializes in
/// a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entities: Vec<Entity>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an entity by IRI. Returns `None` if not present.
    #[must_use]
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Returns the entity with the given IRI, inserting an empty one if
    /// it does not exist yet.
    pub fn upsert_entity(&mut self, id: &str) -> &mut Entity {
        if let Some(idx) = self.entities.iter().position(|e| e.id == id) {
            &mut self.entities[idx]
        } else {
            self.entities.push(Entity::new(id));
            // Just pushed, so the vec is non-empty.
            let last = self.entities.len() - 1;
            &mut self.entities[last]
        }
    }

    /// All entities in first-seen order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the dataset holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Read seam between a graph of linked entities and the profile
/// resolver.
///
/// Absence is a valid, non-error outcome; implementations never raise.
/// `Dataset` is the canonical implementation; tests may supply
/// hand-built graphs.
pub trait LinkedDataGraph {
    /// Looks up an entity by identifier.
    fn entity(&self, id: &str) -> Option<&Entity>;
}

impl LinkedDataGraph for Dataset {
    fn entity(&self, id: &str) -> Option<&Entity> {
        Dataset::entity(self, id)
    }
}
