//! Document store trait for pluggable persistence backends.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::document::{Document, Fields, FindQuery, UpsertOutcome};

/// A collection-oriented document store.
///
/// Every method is atomic for the single document it touches. Nothing here
/// spans documents: a read followed by a write is two independent calls.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Return documents matching the query, in query order.
    async fn find(&self, collection: &str, query: &FindQuery) -> AppResult<Vec<Document>>;

    /// Find a document by identifier.
    async fn find_by_id(&self, collection: &str, id: Uuid) -> AppResult<Option<Document>>;

    /// Find the first document whose string `field` equals `value`.
    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Option<Document>>;

    /// Insert a new document and return its identifier.
    async fn insert(&self, collection: &str, document: Document) -> AppResult<Uuid>;

    /// Overwrite the given top-level fields of a document, leaving the rest
    /// untouched. Returns `false` when no document has that identifier.
    async fn update(&self, collection: &str, id: Uuid, set: Fields) -> AppResult<bool>;

    /// Delete a document. Returns `false` when no document has that identifier.
    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool>;

    /// Create or replace the single document whose `key_field` equals `key`.
    ///
    /// On insert the stored body is `replacement` plus `on_insert`. On
    /// replace the body becomes `replacement`, except that keys named in
    /// `on_insert` keep their previously stored values.
    async fn upsert_by(
        &self,
        collection: &str,
        key_field: &str,
        key: &str,
        replacement: Fields,
        on_insert: Fields,
    ) -> AppResult<UpsertOutcome>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
