use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use orderdesk_core::{EntityId, RepositoryError};
use orderdesk_orders::{NewOrder, Order, OrderId, OrderStore};

/// In-memory order store for tests/dev. Append-only; orders are never
/// mutated after creation.
#[derive(Debug)]
pub struct InMemoryOrderStore {
    inner: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        let orders = self.inner.read().ok()?;
        orders.iter().find(|o| o.id == id).cloned()
    }

    pub fn all(&self) -> Vec<Order> {
        match self.inner.read() {
            Ok(orders) => orders.clone(),
            Err(_) => vec![],
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let order = Order {
            id: OrderId::new(EntityId::new()),
            customer: order.customer,
            line_items: order.line_items,
            created_at: Utc::now(),
        };

        let mut orders = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("order store lock poisoned"))?;
        orders.push(order.clone());
        tracing::debug!(order_id = %order.id, lines = order.line_items.len(), "order stored");

        Ok(order)
    }
}
