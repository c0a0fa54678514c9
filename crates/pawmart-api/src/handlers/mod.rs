//! Route handlers, one module per resource.

pub mod health;
pub mod listing;
pub mod order;
pub mod token;
pub mod user;
