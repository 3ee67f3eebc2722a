//! Product API types

use serde::Serialize;
use utoipa::ToSchema;

use crate::data::types::{QueryResult, Record};

/// Static featured listing
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProductsResponse {
    /// Products with only `name` and `price`
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Record>,
    /// Number of products in this response
    pub nb_hits: usize,
}

impl From<QueryResult> for FeaturedProductsResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            nb_hits: result.records.len(),
            products: result.records,
        }
    }
}

/// Filtered product listing
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    /// Projected products of the requested page
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Record>,
    /// Number of products in this page
    pub nb_hits: usize,
    /// Number of products matching the filters across all pages
    pub total_hits: u64,
}

impl From<QueryResult> for ProductsResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            nb_hits: result.records.len(),
            total_hits: result.total_matched,
            products: result.records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result() -> QueryResult {
        let record: Record = serde_json::from_value(json!({"name": "sofa", "price": 10.0})).unwrap();
        QueryResult {
            records: vec![record],
            total_matched: 12,
        }
    }

    #[test]
    fn test_products_response_wire_names() {
        let value = serde_json::to_value(ProductsResponse::from(result())).unwrap();
        assert_eq!(value["nbHits"], 1);
        assert_eq!(value["totalHits"], 12);
        assert_eq!(value["products"][0]["name"], "sofa");
    }

    #[test]
    fn test_featured_response_omits_total() {
        let value = serde_json::to_value(FeaturedProductsResponse::from(result())).unwrap();
        assert_eq!(value["nbHits"], 1);
        assert!(value.get("totalHits").is_none());
    }
}
