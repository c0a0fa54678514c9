//! Listing CRUD service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use pawmart_auth::{require_owner, verify_claimed_owner};
use pawmart_core::config::ListingsConfig;
use pawmart_core::error::AppError;
use pawmart_database::repositories::ListingRepository;
use pawmart_entity::listing::{CreateListing, Listing, UpdateListing};

use crate::context::RequestContext;

/// Manages the listing catalogue.
#[derive(Debug, Clone)]
pub struct ListingService {
    /// Listing repository.
    listing_repo: Arc<ListingRepository>,
    /// Catalogue limits.
    config: ListingsConfig,
}

/// Request to publish a new listing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateListingRequest {
    /// Owner claimed by the caller. Must equal the authenticated identity.
    pub owner: Option<String>,
    /// Title.
    pub name: String,
    /// Category.
    pub category: String,
    /// Asking price.
    pub price: f64,
    /// Pickup location.
    pub location: String,
    /// Description.
    pub description: String,
    /// Image URL.
    pub image: Option<String>,
    /// Available-from date.
    pub pickup_date: Option<String>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(listing_repo: Arc<ListingRepository>, config: ListingsConfig) -> Self {
        Self {
            listing_repo,
            config,
        }
    }

    /// Lists every listing, newest first.
    pub async fn list_all(&self) -> Result<Vec<Listing>, AppError> {
        self.listing_repo.find_all().await
    }

    /// Lists the most recent listings; `limit` is clamped to the configured bounds.
    pub async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Listing>, AppError> {
        let limit = self.config.clamp_recent(limit);
        self.listing_repo.find_recent(limit).await
    }

    /// Gets a single listing.
    pub async fn get(&self, id: Uuid) -> Result<Listing, AppError> {
        self.listing_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found"))
    }

    /// Lists the caller's own listings.
    pub async fn list_by_owner(&self, ctx: &RequestContext) -> Result<Vec<Listing>, AppError> {
        self.listing_repo.find_by_owner(&ctx.identity).await
    }

    /// Publishes a listing owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateListingRequest,
    ) -> Result<Listing, AppError> {
        verify_claimed_owner(&ctx.identity, req.owner.as_deref(), true)?;

        let listing = self
            .listing_repo
            .create(
                CreateListing {
                    owner: ctx.identity.clone(),
                    name: req.name,
                    category: req.category,
                    price: req.price,
                    location: req.location,
                    description: req.description,
                    image: req.image,
                    pickup_date: req.pickup_date,
                },
                ctx.request_time,
            )
            .await?;

        info!(owner = %ctx.identity, listing_id = %listing.id, "Listing created");
        Ok(listing)
    }

    /// Updates the editable fields of a listing the caller owns.
    ///
    /// Existence and ownership are checked before the changes are validated.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: UpdateListing,
    ) -> Result<(), AppError> {
        let existing = self.listing_repo.find_by_id(id).await?;
        require_owner(&ctx.identity, existing, "Listing")?;

        if changes.is_empty() {
            return Err(AppError::validation("No editable fields supplied"));
        }
        changes
            .validate()
            .map_err(|errors| AppError::validation(errors.to_string()))?;

        if !self
            .listing_repo
            .update(id, changes, ctx.request_time)
            .await?
        {
            return Err(AppError::not_found("Listing not found"));
        }

        info!(owner = %ctx.identity, listing_id = %id, "Listing updated");
        Ok(())
    }

    /// Deletes a listing the caller owns.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let existing = self.listing_repo.find_by_id(id).await?;
        require_owner(&ctx.identity, existing, "Listing")?;

        if !self.listing_repo.delete(id).await? {
            return Err(AppError::not_found("Listing not found"));
        }

        info!(owner = %ctx.identity, listing_id = %id, "Listing deleted");
        Ok(())
    }
}
