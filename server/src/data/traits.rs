//! Repository traits
//!
//! The query facade and the seed command talk to the store only through
//! [`CatalogRepository`], so tests and alternative backends can stand in for
//! SQLite.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::FilterSpecification;
use crate::data::shaping::ShapingPolicy;
use crate::data::types::{NewProduct, Record};

/// Product catalog storage
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Records matching `filter`, sorted, projected and paged per `policy`
    async fn find_products(
        &self,
        filter: &FilterSpecification,
        policy: &ShapingPolicy,
    ) -> Result<Vec<Record>, DataError>;

    /// Number of records matching `filter`, ignoring pagination
    async fn count_products(&self, filter: &FilterSpecification) -> Result<u64, DataError>;

    /// Insert products in one transaction, returning the number inserted
    async fn insert_products(&self, products: &[NewProduct]) -> Result<u64, DataError>;

    /// Delete every product, returning the number removed
    async fn clear_products(&self) -> Result<u64, DataError>;
}
