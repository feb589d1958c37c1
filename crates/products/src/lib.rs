//! Products domain module (catalog).
//!
//! Catalog snapshots, requested-product pairs, and the catalog contract order
//! creation validates and prices against. Persistence lives behind the
//! contract, outside this crate.

pub mod catalog;

pub use catalog::{CatalogProduct, OrderedProduct, ProductCatalog, ProductId};
