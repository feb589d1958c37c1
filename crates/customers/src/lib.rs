//! Customers domain module.
//!
//! Customer identity and the lookup contract order creation resolves customers
//! through. Persistence lives behind the contract, outside this crate.

pub mod customer;

pub use customer::{ContactInfo, Customer, CustomerId, CustomerLookup};
