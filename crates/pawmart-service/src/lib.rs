//! # pawmart-service
//!
//! Business logic service layer for PawMart. Each service wraps a repository
//! and applies the ownership rules before anything is written.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod directory;
pub mod listing;
pub mod order;

pub use context::RequestContext;
pub use directory::{DirectoryService, SyncOutcome};
pub use listing::{CreateListingRequest, ListingService};
pub use order::{CreateOrderRequest, OrderService};
