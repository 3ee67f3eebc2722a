//! Domain logic for the product catalog
//!
//! - `catalog` - Query execution facade over the product store

pub mod catalog;

pub use catalog::CatalogService;
