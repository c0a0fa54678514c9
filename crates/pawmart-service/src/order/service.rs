//! Order placement service.

use std::sync::Arc;

use tracing::info;

use pawmart_auth::verify_claimed_owner;
use pawmart_core::error::AppError;
use pawmart_database::repositories::OrderRepository;
use pawmart_entity::order::{CreateOrder, Order};

use crate::context::RequestContext;

/// Places and lists orders.
#[derive(Debug, Clone)]
pub struct OrderService {
    /// Order repository.
    order_repo: Arc<OrderRepository>,
}

/// Request to place an order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateOrderRequest {
    /// Buyer claimed by the caller; checked against the identity when present.
    pub owner: Option<String>,
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
    /// Notes for the seller.
    pub notes: Option<String>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(order_repo: Arc<OrderRepository>) -> Self {
        Self { order_repo }
    }

    /// Places an order on behalf of the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateOrderRequest,
    ) -> Result<Order, AppError> {
        verify_claimed_owner(&ctx.identity, req.owner.as_deref(), false)?;

        let order = self
            .order_repo
            .create(
                CreateOrder {
                    owner: ctx.identity.clone(),
                    listing_id: req.listing_id,
                    listing_name: req.listing_name,
                    quantity: req.quantity,
                    price: req.price,
                    address: req.address,
                    phone: req.phone,
                    notes: req.notes,
                },
                ctx.request_time,
            )
            .await?;

        info!(
            owner = %ctx.identity,
            order_id = %order.id,
            listing_id = %order.listing_id,
            "Order placed"
        );
        Ok(order)
    }

    /// Lists the caller's own orders, newest first.
    pub async fn list_for(&self, ctx: &RequestContext) -> Result<Vec<Order>, AppError> {
        self.order_repo.find_by_owner(&ctx.identity).await
    }
}
