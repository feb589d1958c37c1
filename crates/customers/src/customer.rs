use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use orderdesk_core::{EntityId, RepositoryError};

/// Customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub EntityId);

impl CustomerId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Contact information for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: None,
            phone: None,
            address: None,
        }
    }
}

/// A customer as resolved by the directory at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub contact: ContactInfo,
}

/// Lookup contract: resolve a customer by identifier.
///
/// Implemented by persistence-layer adapters; domain code only consumes it.
/// The lookup has no side effects.
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    /// Resolve a customer. `Ok(None)` means the identifier does not exist.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;
}

#[async_trait]
impl<T> CustomerLookup for Arc<T>
where
    T: CustomerLookup + ?Sized,
{
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        (**self).find_by_id(id).await
    }
}
