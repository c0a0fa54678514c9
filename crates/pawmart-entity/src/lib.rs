//! # pawmart-entity
//!
//! Domain entities stored as documents: marketplace listings, orders placed
//! against them, and identity directory entries.

pub mod directory;
pub mod listing;
pub mod order;

pub use directory::DirectoryEntry;
pub use listing::{CreateListing, Listing, UpdateListing};
pub use order::{CreateOrder, Order};
