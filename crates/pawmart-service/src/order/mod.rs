//! Orders placed by authenticated buyers.

pub mod service;

pub use service::{CreateOrderRequest, OrderService};
