//! In-memory document store backed by `dashmap`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::DateTime;
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use pawmart_core::error::AppError;
use pawmart_core::result::AppResult;
use pawmart_core::traits::DocumentStore;
use pawmart_core::types::{Document, Fields, FindQuery, SortDirection, UpsertOutcome};

/// Process-local collections of documents.
///
/// Each collection is an ordered map guarded by its `DashMap` shard lock, so
/// every primitive (including the keyed upsert) is atomic for the documents
/// it touches. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: DashMap<String, BTreeMap<Uuid, Fields>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find(&self, collection: &str, query: &FindQuery) -> AppResult<Vec<Document>> {
        let mut docs: Vec<Document> = match self.collections.get(collection) {
            Some(docs) => docs
                .iter()
                .filter(|(_, body)| query.matches(body))
                .map(|(id, body)| Document::with_id(*id, body.clone()))
                .collect(),
            None => return Ok(Vec::new()),
        };

        if let Some(sort) = &query.sort {
            docs.sort_by(|a, b| {
                let ord = compare_values(a.body.get(&sort.field), b.body.get(&sort.field))
                    .then_with(|| a.id.cmp(&b.id));
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            docs.truncate(limit);
        }

        Ok(docs)
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> AppResult<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(&id).cloned())
            .map(|body| Document::with_id(id, body)))
    }

    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Option<Document>> {
        Ok(self.collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|(_, body)| body.get(field).and_then(Value::as_str) == Some(value))
                .map(|(id, body)| Document::with_id(*id, body.clone()))
        }))
    }

    async fn insert(&self, collection: &str, document: Document) -> AppResult<Uuid> {
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        if docs.contains_key(&document.id) {
            return Err(AppError::store(format!(
                "Duplicate document id {} in {collection}",
                document.id
            )));
        }
        docs.insert(document.id, document.body);
        debug!(collection, id = %document.id, "Inserted document");
        Ok(document.id)
    }

    async fn update(&self, collection: &str, id: Uuid, set: Fields) -> AppResult<bool> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(false);
        };
        match docs.get_mut(&id) {
            Some(body) => {
                body.extend(set);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool> {
        Ok(self
            .collections
            .get_mut(collection)
            .map(|mut docs| docs.remove(&id).is_some())
            .unwrap_or(false))
    }

    async fn upsert_by(
        &self,
        collection: &str,
        key_field: &str,
        key: &str,
        mut replacement: Fields,
        on_insert: Fields,
    ) -> AppResult<UpsertOutcome> {
        replacement.insert(key_field.to_string(), Value::from(key));

        let mut docs = self.collections.entry(collection.to_string()).or_default();
        let existing = docs
            .iter()
            .find(|(_, body)| body.get(key_field).and_then(Value::as_str) == Some(key))
            .map(|(id, _)| *id);

        match existing {
            Some(id) => {
                let previous = docs.remove(&id).unwrap_or_default();
                for (field, fallback) in on_insert {
                    let kept = previous.get(&field).cloned().unwrap_or(fallback);
                    replacement.insert(field, kept);
                }
                docs.insert(id, replacement);
                Ok(UpsertOutcome::Replaced(id))
            }
            None => {
                let id = Uuid::now_v7();
                for (field, value) in on_insert {
                    replacement.insert(field, value);
                }
                docs.insert(id, replacement);
                Ok(UpsertOutcome::Inserted(id))
            }
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Orders JSON values: numbers numerically, RFC 3339 strings chronologically,
/// other strings lexically, missing values first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => {
            match (DateTime::parse_from_rfc3339(x), DateTime::parse_from_rfc3339(y)) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => x.cmp(y),
            }
        }
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}
