//! CatalogRepository trait implementation for SQLite

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::FilterSpecification;
use crate::data::shaping::ShapingPolicy;
use crate::data::traits::CatalogRepository;
use crate::data::types::{NewProduct, Record};

use super::SqliteService;
use super::repositories::product;

#[async_trait]
impl CatalogRepository for Arc<SqliteService> {
    async fn find_products(
        &self,
        filter: &FilterSpecification,
        policy: &ShapingPolicy,
    ) -> Result<Vec<Record>, DataError> {
        product::find_products(self.pool(), filter, policy)
            .await
            .map_err(Into::into)
    }

    async fn count_products(&self, filter: &FilterSpecification) -> Result<u64, DataError> {
        product::count_products(self.pool(), filter)
            .await
            .map_err(Into::into)
    }

    async fn insert_products(&self, products: &[NewProduct]) -> Result<u64, DataError> {
        product::insert_products(self.pool(), products)
            .await
            .map_err(Into::into)
    }

    async fn clear_products(&self) -> Result<u64, DataError> {
        product::clear_products(self.pool())
            .await
            .map_err(Into::into)
    }
}
