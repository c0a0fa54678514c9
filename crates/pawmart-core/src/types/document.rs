//! Schemaless documents and the queries that select them.

use serde_json::Value;
use uuid::Uuid;

use super::sorting::SortField;

/// The field map of a stored document.
pub type Fields = serde_json::Map<String, Value>;

/// A document as held by a [`DocumentStore`](crate::traits::DocumentStore).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store-wide identifier, unique within its collection.
    pub id: Uuid,
    /// Document body.
    pub body: Fields,
}

impl Document {
    /// Wraps a body under a fresh time-ordered identifier.
    pub fn new(body: Fields) -> Self {
        Self {
            id: Uuid::now_v7(),
            body,
        }
    }

    /// Wraps a body under an existing identifier.
    pub fn with_id(id: Uuid, body: Fields) -> Self {
        Self { id, body }
    }

    /// Returns a string field, if present.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.body.get(field).and_then(Value::as_str)
    }
}

/// Equality filter, ordering, and bound for a collection scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    /// Field/value pairs that must all match exactly.
    pub filter: Vec<(String, Value)>,
    /// Optional ordering.
    pub sort: Option<SortField>,
    /// Maximum number of documents to return.
    pub limit: Option<usize>,
}

impl FindQuery {
    /// A query matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds an equality condition.
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.push((field.into(), value.into()));
        self
    }

    /// Sets the ordering.
    pub fn sort(mut self, sort: SortField) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Bounds the result count.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a document body satisfies every filter condition.
    pub fn matches(&self, body: &Fields) -> bool {
        self.filter
            .iter()
            .all(|(field, expected)| body.get(field) == Some(expected))
    }
}

/// Result of a keyed upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No document carried the key; a new one was created.
    Inserted(Uuid),
    /// An existing document was replaced in place.
    Replaced(Uuid),
}

impl UpsertOutcome {
    /// Identifier of the inserted or replaced document.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Inserted(id) | Self::Replaced(id) => *id,
        }
    }

    /// Whether the upsert created a new document.
    pub fn was_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}
