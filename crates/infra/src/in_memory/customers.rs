use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use orderdesk_core::RepositoryError;
use orderdesk_customers::{Customer, CustomerId, CustomerLookup};

/// In-memory customer directory for tests/dev.
#[derive(Debug)]
pub struct InMemoryCustomerDirectory {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.id, customer);
        }
    }
}

impl Default for InMemoryCustomerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerLookup for InMemoryCustomerDirectory {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::storage("customer directory lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }
}
