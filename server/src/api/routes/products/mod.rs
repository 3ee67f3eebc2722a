//! Product API endpoints

pub mod types;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::QueryPairs;
use crate::api::types::ApiError;
use crate::data::types::QueryParameters;
use crate::domain::CatalogService;

use types::{FeaturedProductsResponse, ProductsResponse};

/// Shared state for Product API endpoints
#[derive(Clone)]
pub struct ProductsApiState {
    pub catalog: CatalogService,
}

/// Build Product API routes
pub fn routes(catalog: CatalogService) -> Router<()> {
    let state = ProductsApiState { catalog };

    Router::new()
        .route("/", get(list_products))
        .route("/static", get(list_featured))
        .with_state(state)
}

/// Featured products: name and price of the first four products by creation time
#[utoipa::path(
    get,
    path = "/api/v1/products/static",
    tag = "products",
    responses(
        (status = 200, description = "Featured products", body = FeaturedProductsResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_featured(
    State(state): State<ProductsApiState>,
) -> Result<Json<FeaturedProductsResponse>, ApiError> {
    let result = state
        .catalog
        .list_featured()
        .await
        .map_err(ApiError::from_data)?;
    Ok(Json(result.into()))
}

/// List products with filtering, sorting, projection and pagination
///
/// Invalid values never fail the request: unknown fields and malformed
/// numeric clauses are ignored, bad page numbers fall back to defaults, and
/// only the first value of a repeated parameter is used.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    params(
        ("featured" = Option<String>, Query, description = "\"true\" for featured products, anything else for the rest"),
        ("company" = Option<String>, Query, description = "Exact company match"),
        ("name" = Option<String>, Query, description = "Case-insensitive substring of the name"),
        ("sort" = Option<String>, Query, description = "Comma-separated fields, '-' prefix for descending (default createdAt)"),
        ("fields" = Option<String>, Query, description = "Comma-separated fields to return"),
        ("numericFilters" = Option<String>, Query, description = "Comparisons on price or rating, e.g. price>50,rating>=4"),
        ("page" = Option<String>, Query, description = "Page number, 1-based (default 1)"),
        ("limit" = Option<String>, Query, description = "Page size (default 10)")
    ),
    responses(
        (status = 200, description = "Matching products", body = ProductsResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_products(
    State(state): State<ProductsApiState>,
    QueryPairs(query): QueryPairs<QueryParameters>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let result = state
        .catalog
        .list_products(&query)
        .await
        .map_err(ApiError::from_data)?;
    Ok(Json(result.into()))
}
