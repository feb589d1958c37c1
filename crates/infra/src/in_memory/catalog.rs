use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use orderdesk_core::RepositoryError;
use orderdesk_products::{CatalogProduct, OrderedProduct, ProductCatalog, ProductId};

/// In-memory product catalog for tests/dev.
#[derive(Debug)]
pub struct InMemoryProductCatalog {
    inner: RwLock<HashMap<ProductId, CatalogProduct>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, product: CatalogProduct) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id, product);
        }
    }

    /// Current catalog record, if any (seeding checks, assertions).
    pub fn get(&self, id: &ProductId) -> Option<CatalogProduct> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }
}

impl Default for InMemoryProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn find_all_by_id(
        &self,
        requested: &[OrderedProduct],
    ) -> Result<Vec<CatalogProduct>, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("catalog lock poisoned"))?;

        // Matches only, in request order; unmatched identifiers are skipped.
        Ok(requested
            .iter()
            .filter_map(|r| map.get(&r.id).cloned())
            .collect())
    }

    async fn update_quantity(&self, requested: &[OrderedProduct]) -> Result<(), RepositoryError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| RepositoryError::storage("catalog lock poisoned"))?;

        for entry in requested {
            if let Some(product) = map.get_mut(&entry.id) {
                product.quantity -= entry.quantity;
                tracing::debug!(product_id = %entry.id, quantity = product.quantity, "stock decremented");
            }
        }
        Ok(())
    }
}
