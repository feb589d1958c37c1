use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{EntityId, RepositoryError};
use orderdesk_customers::Customer;
use orderdesk_products::ProductId;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order line: product, unit price, quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    /// Price in smallest currency unit (e.g., cents), copied from the catalog
    /// snapshot at order-creation time. Later catalog price changes do not
    /// affect stored orders.
    pub unit_price: u64,
    pub quantity: i64,
}

/// A validated, priced order ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub line_items: Vec<OrderLineItem>,
}

/// A stored order. Identity and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub line_items: Vec<OrderLineItem>,
    pub created_at: DateTime<Utc>,
}

/// Store contract: persist a new order, returning the stored order.
///
/// Each call creates a distinct order; the store never deduplicates. Ownership
/// of the order transfers to the store on creation and callers never mutate
/// the returned order.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<Order, RepositoryError>;
}

#[async_trait]
impl<T> OrderStore for Arc<T>
where
    T: OrderStore + ?Sized,
{
    async fn create(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        (**self).create(order).await
    }
}
