//! Order repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use pawmart_core::result::AppResult;
use pawmart_core::traits::DocumentStore;
use pawmart_core::types::{Document, FindQuery, SortField};
use pawmart_entity::order::{COLLECTION, CreateOrder, Order};

use super::{from_document, to_fields};

/// Repository for order documents.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    store: Arc<dyn DocumentStore>,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Insert a new order stamped with `now`.
    pub async fn create(&self, order: CreateOrder, now: DateTime<Utc>) -> AppResult<Order> {
        let order = order.into_order(Uuid::now_v7(), now);
        let body = to_fields(&order)?;

        self.store
            .insert(COLLECTION, Document::with_id(order.id, body))
            .await?;
        Ok(order)
    }

    /// Find an order by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        self.store
            .find_by_id(COLLECTION, id)
            .await?
            .map(from_document)
            .transpose()
    }

    /// Orders placed by `owner`, newest first.
    pub async fn find_by_owner(&self, owner: &str) -> AppResult<Vec<Order>> {
        let query = FindQuery::all()
            .where_eq("owner", owner)
            .sort(SortField::newest_first());

        self.store
            .find(COLLECTION, &query)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }
}
