//! Listing entity.

pub mod model;

pub use model::{CreateListing, EDITABLE_FIELDS, Listing, UpdateListing};

/// Collection holding listing documents.
pub const COLLECTION: &str = "listings";
