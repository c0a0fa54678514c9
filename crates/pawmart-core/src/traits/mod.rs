//! Core traits defined in `pawmart-core` and implemented by other crates.

pub mod owned;
pub mod store;

pub use owned::Owned;
pub use store::DocumentStore;
