//! Listing repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use pawmart_core::result::AppResult;
use pawmart_core::traits::DocumentStore;
use pawmart_core::types::{Document, FindQuery, SortField};
use pawmart_entity::listing::{COLLECTION, CreateListing, Listing, UpdateListing};

use super::{from_document, to_fields};

/// Repository for listing documents.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    store: Arc<dyn DocumentStore>,
}

impl ListingRepository {
    /// Create a new listing repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All listings, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Listing>> {
        self.find(FindQuery::all().sort(SortField::newest_first()))
            .await
    }

    /// The `limit` most recently created listings.
    pub async fn find_recent(&self, limit: usize) -> AppResult<Vec<Listing>> {
        self.find(FindQuery::all().sort(SortField::newest_first()).limit(limit))
            .await
    }

    /// Listings created by `owner`, newest first.
    pub async fn find_by_owner(&self, owner: &str) -> AppResult<Vec<Listing>> {
        self.find(
            FindQuery::all()
                .where_eq("owner", owner)
                .sort(SortField::newest_first()),
        )
        .await
    }

    /// Find a listing by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Listing>> {
        self.store
            .find_by_id(COLLECTION, id)
            .await?
            .map(from_document)
            .transpose()
    }

    /// Insert a new listing stamped with `now`.
    pub async fn create(&self, listing: CreateListing, now: DateTime<Utc>) -> AppResult<Listing> {
        let listing = listing.into_listing(Uuid::now_v7(), now);
        let body = to_fields(&listing)?;

        self.store
            .insert(COLLECTION, Document::with_id(listing.id, body))
            .await?;
        Ok(listing)
    }

    /// Apply whitelisted changes. Returns `false` if the listing vanished.
    pub async fn update(
        &self,
        id: Uuid,
        changes: UpdateListing,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        self.store
            .update(COLLECTION, id, changes.into_set(now))
            .await
    }

    /// Delete a listing. Returns `false` if it did not exist.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        self.store.delete(COLLECTION, id).await
    }

    async fn find(&self, query: FindQuery) -> AppResult<Vec<Listing>> {
        self.store
            .find(COLLECTION, &query)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }
}
