//! Orders domain module.
//!
//! This crate contains the "create order" use case: business validation,
//! price snapshotting, and orchestration of the customer, catalog, and order
//! store contracts. No IO, HTTP, or storage of its own.

pub mod create;
pub mod order;

pub use create::{CreateOrder, CreateOrderError};
pub use order::{NewOrder, Order, OrderId, OrderLineItem, OrderStore};
