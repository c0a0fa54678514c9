//! Order entity.

pub mod model;

pub use model::{CreateOrder, Order};

/// Collection holding order documents.
pub const COLLECTION: &str = "orders";
