use std::sync::Arc;

use crate::data::filters::{FilterSpecification, build_filter_spec};
use crate::data::shaping::ShapingPolicy;
use crate::data::traits::CatalogRepository;
use crate::data::types::{NewProduct, QueryParameters, QueryResult};
use crate::data::DataError;

/// Query execution facade over a [`CatalogRepository`]
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Run one query: the shaped page of matches plus the filter-only match count
    pub async fn execute(
        &self,
        filter: &FilterSpecification,
        policy: &ShapingPolicy,
    ) -> Result<QueryResult, DataError> {
        let (records, total_matched) = tokio::try_join!(
            self.repository.find_products(filter, policy),
            self.repository.count_products(filter),
        )?;

        tracing::debug!(
            predicates = filter.predicates().len(),
            page = policy.page,
            limit = policy.limit,
            returned = records.len(),
            total_matched,
            "Executed product query"
        );

        Ok(QueryResult {
            records,
            total_matched,
        })
    }

    /// Static listing: name and price of the first few products, unfiltered
    pub async fn list_featured(&self) -> Result<QueryResult, DataError> {
        self.execute(&FilterSpecification::match_all(), &ShapingPolicy::featured())
            .await
    }

    /// Filtered, sorted, projected and paged product listing
    pub async fn list_products(&self, params: &QueryParameters) -> Result<QueryResult, DataError> {
        let filter = build_filter_spec(params);
        let policy = ShapingPolicy::from_params(params);
        self.execute(&filter, &policy).await
    }

    /// Load products into the store, first removing existing ones unless `keep` is set
    pub async fn load_products(
        &self,
        products: &[NewProduct],
        keep: bool,
    ) -> Result<u64, DataError> {
        if !keep {
            let removed = self.repository.clear_products().await?;
            tracing::debug!(removed, "Cleared existing products");
        }
        self.repository.insert_products(products).await
    }
}
