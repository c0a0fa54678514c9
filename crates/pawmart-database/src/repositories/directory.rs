//! Identity directory repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use pawmart_core::error::AppError;
use pawmart_core::result::AppResult;
use pawmart_core::traits::DocumentStore;
use pawmart_core::types::{Document, Fields, UpsertOutcome};
use pawmart_entity::directory::{COLLECTION, DirectoryEntry, KEY_FIELD};

/// Repository for directory entries, one per identity.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    store: Arc<dyn DocumentStore>,
}

impl DirectoryRepository {
    /// Create a new directory repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create or fully replace the entry for `email`.
    ///
    /// `attributes` must already be free of server-managed keys. The first
    /// sync's `created_at` survives later syncs; everything else is replaced.
    pub async fn upsert(
        &self,
        email: &str,
        attributes: Fields,
        now: DateTime<Utc>,
    ) -> AppResult<(DirectoryEntry, UpsertOutcome)> {
        let stamp = Value::from(now.to_rfc3339());

        let mut replacement = attributes;
        replacement.insert("updated_at".to_string(), stamp.clone());

        let mut on_insert = Fields::new();
        on_insert.insert("created_at".to_string(), stamp);

        let outcome = self
            .store
            .upsert_by(COLLECTION, KEY_FIELD, email, replacement, on_insert)
            .await?;

        let document = self
            .store
            .find_by_id(COLLECTION, outcome.id())
            .await?
            .ok_or_else(|| {
                AppError::internal(format!("Directory entry for {email} vanished after upsert"))
            })?;

        Ok((decode(document)?, outcome))
    }
}

fn decode(document: Document) -> AppResult<DirectoryEntry> {
    Ok(serde_json::from_value(Value::Object(document.body))?)
}
