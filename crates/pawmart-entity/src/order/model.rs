//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pawmart_core::traits::Owned;

/// An order placed by a buyer against a listing.
///
/// The listing reference is informational; nothing ties the two documents
/// together transactionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Identity that placed the order.
    pub owner: String,
    /// Listing the order refers to.
    pub listing_id: String,
    /// Listing title at the time of ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_name: Option<String>,
    /// Number of units.
    pub quantity: u32,
    /// Agreed price.
    pub price: f64,
    /// Delivery address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Additional notes for the seller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the order was placed (server time).
    pub created_at: DateTime<Utc>,
}

impl Owned for Order {
    fn owner(&self) -> &str {
        &self.owner
    }
}

/// Data required to place an order.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    /// Buyer identity.
    pub owner: String,
    /// Listing reference.
    pub listing_id: String,
    /// Listing title.
    pub listing_name: Option<String>,
    /// Number of units.
    pub quantity: u32,
    /// Agreed price.
    pub price: f64,
    /// Delivery address.
    pub address: String,
    /// Contact phone.
    pub phone: String,
    /// Notes.
    pub notes: Option<String>,
}

impl CreateOrder {
    /// Materializes the order with a fresh id and server timestamp.
    pub fn into_order(self, id: Uuid, now: DateTime<Utc>) -> Order {
        Order {
            id,
            owner: self.owner,
            listing_id: self.listing_id,
            listing_name: self.listing_name,
            quantity: self.quantity,
            price: self.price,
            address: self.address,
            phone: self.phone,
            notes: self.notes,
            created_at: now,
        }
    }
}
