//! Product catalog queries
//!
//! [`CatalogService`] is the single entry point used by the HTTP layer and the
//! seed command. It combines the filter builder and shaping policy with the
//! store and never touches SQL itself.

mod service;

pub use service::CatalogService;
