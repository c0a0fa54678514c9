//! Listing entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use pawmart_core::traits::Owned;
use pawmart_core::types::Fields;

/// Fields an owner may change after creation.
pub const EDITABLE_FIELDS: &[&str] = &[
    "name",
    "category",
    "price",
    "location",
    "description",
    "image",
    "pickup_date",
];

/// A pet, product, or service offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: Uuid,
    /// Identity that created the listing.
    pub owner: String,
    /// Title.
    pub name: String,
    /// Category (pets, food, accessories, care products).
    pub category: String,
    /// Asking price; zero for adoption.
    pub price: f64,
    /// Pickup location.
    pub location: String,
    /// Free-form description.
    pub description: String,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Available-from date as entered by the owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_date: Option<String>,
    /// When the listing was created (server time).
    pub created_at: DateTime<Utc>,
    /// When the listing was last edited (server time).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Owned for Listing {
    fn owner(&self) -> &str {
        &self.owner
    }
}

/// Data required to create a new listing.
///
/// `owner` is always the authenticated identity, never the request body.
#[derive(Debug, Clone)]
pub struct CreateListing {
    /// Owning identity.
    pub owner: String,
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

impl CreateListing {
    /// Materializes the listing with a fresh id and server timestamp.
    pub fn into_listing(self, id: Uuid, now: DateTime<Utc>) -> Listing {
        Listing {
            id,
            owner: self.owner,
            name: self.name,
            category: self.category,
            price: self.price,
            location: self.location,
            description: self.description,
            image: self.image,
            pickup_date: self.pickup_date,
            created_at: now,
            updated_at: None,
        }
    }
}

/// Partial update of the editable listing fields.
///
/// Deserializes straight from a request body: keys outside the whitelist
/// (`owner`, `id`, `created_at`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateListing {
    /// New title.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// New category.
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    /// New price.
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: Option<f64>,
    /// New location.
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    /// New description.
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    /// New image URL.
    #[validate(url(message = "image must be a URL"))]
    pub image: Option<String>,
    /// New available-from date.
    pub pickup_date: Option<String>,
}

impl UpdateListing {
    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.pickup_date.is_none()
    }

    /// Builds the `$set` map: only whitelisted fields plus `updated_at`.
    pub fn into_set(self, now: DateTime<Utc>) -> Fields {
        let mut set = Fields::new();
        let mut put = |key: &str, value: Option<Value>| {
            if let Some(value) = value {
                set.insert(key.to_string(), value);
            }
        };

        put("name", self.name.map(Value::from));
        put("category", self.category.map(Value::from));
        put("price", self.price.map(Value::from));
        put("location", self.location.map(Value::from));
        put("description", self.description.map(Value::from));
        put("image", self.image.map(Value::from));
        put("pickup_date", self.pickup_date.map(Value::from));

        set.retain(|key, _| EDITABLE_FIELDS.contains(&key.as_str()));
        set.insert("updated_at".to_string(), Value::from(now.to_rfc3339()));
        set
    }
}
