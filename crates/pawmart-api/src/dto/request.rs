//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pawmart_service::{CreateListingRequest, CreateOrderRequest};

/// Create listing request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingBody {
    /// Owner claimed by the caller.
    #[serde(default)]
    pub owner: Option<String>,
    /// Older clients send the claim as `email`; `owner` wins when both are set.
    #[serde(default)]
    pub email: Option<String>,
    /// Title.
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    /// Category.
    #[validate(length(min = 1, max = 100, message = "category is required"))]
    pub category: String,
    /// Asking price.
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    /// Pickup location.
    #[validate(length(min = 1, max = 200, message = "location is required"))]
    pub location: String,
    /// Description.
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: String,
    /// Image URL.
    #[serde(default)]
    #[validate(url(message = "image must be a URL"))]
    pub image: Option<String>,
    /// Available-from date.
    #[serde(default)]
    pub pickup_date: Option<String>,
}

impl From<CreateListingBody> for CreateListingRequest {
    fn from(body: CreateListingBody) -> Self {
        Self {
            owner: body.owner.or(body.email),
            name: body.name,
            category: body.category,
            price: body.price,
            location: body.location,
            description: body.description,
            image: body.image,
            pickup_date: body.pickup_date,
        }
    }
}

/// Place order request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderBody {
    /// Buyer claimed by the caller.
    #[serde(default)]
    pub owner: Option<String>,
    /// Alternative spelling of `owner`, used only when `owner` is absent.
    #[serde(default)]
    pub email: Option<String>,
    /// Listing reference.
    #[serde(alias = "listingId")]
    #[validate(length(min = 1, message = "listing_id is required"))]
    pub listing_id: String,
    /// Listing title.
    #[serde(default, alias = "listingName")]
    pub listing_name: Option<String>,
    /// Number of units.
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
    /// Agreed price.
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    /// Delivery address.
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    /// Contact phone.
    #[validate(length(min = 3, max = 32, message = "phone is required"))]
    pub phone: String,
    /// Notes for the seller.
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl From<CreateOrderBody> for CreateOrderRequest {
    fn from(body: CreateOrderBody) -> Self {
        Self {
            owner: body.owner.or(body.email),
            listing_id: body.listing_id,
            listing_name: body.listing_name,
            quantity: body.quantity,
            price: body.price,
            address: body.address,
            phone: body.phone,
            notes: body.notes,
        }
    }
}

/// Query string for `GET /listings/recent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentQuery {
    /// Requested number of listings.
    pub limit: Option<usize>,
}
