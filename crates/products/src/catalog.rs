use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use orderdesk_core::{EntityId, RepositoryError};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A requested (product, quantity) pair on an incoming order.
///
/// Transient input; never persisted as-is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedProduct {
    pub id: ProductId,
    pub quantity: i64,
}

/// Catalog snapshot of a product at lookup time.
///
/// `price` is in the smallest currency unit (e.g., cents); `quantity` is the
/// stock available when the snapshot was taken. The external catalog owns and
/// mutates the live record; consumers only read snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub price: u64,
    pub quantity: i64,
}

/// Catalog contract: snapshot lookup plus post-order stock decrement.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Resolve the requested products that exist in the catalog.
    ///
    /// Returns only matches; unmatched identifiers are ignored silently.
    /// No side effects.
    async fn find_all_by_id(
        &self,
        requested: &[OrderedProduct],
    ) -> Result<Vec<CatalogProduct>, RepositoryError>;

    /// Decrement stock for each identifier by the requested quantity.
    ///
    /// Quantities are assumed already validated against available stock by the
    /// caller; behavior for unknown identifiers is implementation-defined.
    async fn update_quantity(&self, requested: &[OrderedProduct]) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<T> ProductCatalog for Arc<T>
where
    T: ProductCatalog + ?Sized,
{
    async fn find_all_by_id(
        &self,
        requested: &[OrderedProduct],
    ) -> Result<Vec<CatalogProduct>, RepositoryError> {
        (**self).find_all_by_id(requested).await
    }

    async fn update_quantity(&self, requested: &[OrderedProduct]) -> Result<(), RepositoryError> {
        (**self).update_quantity(requested).await
    }
}
