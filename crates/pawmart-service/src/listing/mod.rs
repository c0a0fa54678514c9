//! Listing catalogue.

pub mod service;

pub use service::{CreateListingRequest, ListingService};
