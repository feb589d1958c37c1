//! Infrastructure layer: adapters for the order-core collaborator contracts.
//!
//! Only in-memory implementations live here (dev/test wiring). Real
//! deployments implement the contracts against their own persistence.

pub mod in_memory;


pub use in_memory::{InMemoryCustomerDirectory, InMemoryOrderStore, InMemoryProductCatalog};
