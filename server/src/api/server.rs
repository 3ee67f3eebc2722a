//! API server initialization

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{self, AllowedOrigins};
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::{health, products};
use crate::core::CoreApp;
use crate::core::constants::DEFAULT_BODY_LIMIT;

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let allowed_origins = AllowedOrigins::new(&app.config.server.host, app.config.server.port);
        Self {
            app,
            allowed_origins,
        }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self {
            app,
            allowed_origins,
        } = self;

        let shutdown = app.shutdown.clone();
        let addr = SocketAddr::new(app.config.server.host.parse()?, app.config.server.port);

        let router = build_router(&app, &allowed_origins);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "Catalog API listening");
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}

/// Assemble every route and the shared layers
fn build_router(app: &CoreApp, allowed_origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/docs", get(swagger_ui_html))
        .route("/api/docs/", get(swagger_ui_html))
        .nest("/api/v1/health", health::routes(app.database.clone()))
        .nest("/api/v1/products", products::routes(app.catalog.clone()))
        .fallback(middleware::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(middleware::cors(allowed_origins))
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, TimeZone, Utc};
    use tower::ServiceExt;

    use crate::data::types::NewProduct;

    fn products() -> Vec<NewProduct> {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let rows = [
            ("accent chair", 25.99, 4.0, "marcos", true),
            ("albany table", 79.99, 3.5, "liddy", false),
            ("bar stool", 40.99, 4.8, "ikea", true),
            ("dining table", 42.99, 3.2, "caressa", false),
            ("emperor bed", 21.99, 4.1, "ikea", true),
            ("leather sofa", 9.99, 4.9, "liddy", false),
        ];
        rows.iter()
            .enumerate()
            .map(|(i, (name, price, rating, company, featured))| NewProduct {
                name: name.to_string(),
                price: *price,
                rating: *rating,
                company: company.to_string(),
                featured: *featured,
                created_at: Some(base + Duration::hours(i as i64)),
            })
            .collect()
    }

    async fn test_router() -> Router {
        let app = CoreApp::for_test().await;
        app.catalog.load_products(&products(), false).await.unwrap();
        build_router(&app, &AllowedOrigins::new("127.0.0.1", 3000))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn names(body: &serde_json::Value) -> Vec<&str> {
        body["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(test_router().await, "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], true);
    }

    #[tokio::test]
    async fn test_featured_listing() {
        let (status, body) = get_json(test_router().await, "/api/v1/products/static").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nbHits"], 4);
        assert_eq!(
            names(&body),
            ["accent chair", "albany table", "bar stool", "dining table"]
        );
        let first = body["products"][0].as_object().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first["price"], 25.99);
    }

    #[tokio::test]
    async fn test_product_listing_defaults() {
        let (status, body) = get_json(test_router().await, "/api/v1/products").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nbHits"], 6);
        assert_eq!(body["totalHits"], 6);
        assert_eq!(body["products"][0]["createdAt"], "2024-03-01T12:00:00.000Z");
        assert_eq!(body["products"][5]["name"], "leather sofa");
    }

    #[tokio::test]
    async fn test_product_listing_with_filters() {
        let uri = "/api/v1/products?company=ikea&numericFilters=price%3E30&fields=name,rating";
        let (status, body) = get_json(test_router().await, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["bar stool"]);
        assert_eq!(body["products"][0]["rating"], 4.8);
        assert!(body["products"][0].get("price").is_none());
    }

    #[tokio::test]
    async fn test_product_listing_pagination_and_sort() {
        let uri = "/api/v1/products?sort=name&page=2&limit=4";
        let (status, body) = get_json(test_router().await, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["emperor bed", "leather sofa"]);
        assert_eq!(body["nbHits"], 2);
        assert_eq!(body["totalHits"], 6);
    }

    #[tokio::test]
    async fn test_name_search_is_case_insensitive() {
        let uri = "/api/v1/products?name=TABLE&sort=-price";
        let (_, body) = get_json(test_router().await, uri).await;
        assert_eq!(names(&body), ["albany table", "dining table"]);
    }

    #[tokio::test]
    async fn test_malformed_values_fall_back() {
        let uri = "/api/v1/products?page=zero&limit=-3&sort=bogus&numericFilters=price%3D%3D";
        let (status, body) = get_json(test_router().await, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalHits"], 6);
        assert_eq!(body["nbHits"], 6);
    }

    #[tokio::test]
    async fn test_long_numeric_filters_are_applied() {
        let filters = vec!["price%3E1"; 200].join(",");
        let uri = format!("/api/v1/products?numericFilters={}", filters);
        let (status, body) = get_json(test_router().await, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalHits"], 6);
    }

    #[tokio::test]
    async fn test_long_name_matches_nothing() {
        let uri = format!("/api/v1/products?name={}", "a".repeat(5000));
        let (status, body) = get_json(test_router().await, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalHits"], 0);
        assert_eq!(body["nbHits"], 0);
    }

    #[tokio::test]
    async fn test_repeated_parameters_use_first_value() {
        let uri = "/api/v1/products?page=1&page=2&limit=4&featured=true&featured=x";
        let (status, body) = get_json(test_router().await, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            names(&body),
            ["accent chair", "bar stool", "emperor bed"]
        );
        assert_eq!(body["totalHits"], 3);
    }

    #[tokio::test]
    async fn test_name_search_folds_non_ascii_case() {
        let app = CoreApp::for_test().await;
        let mut items = products();
        items[0].name = "étagère murale".to_string();
        app.catalog.load_products(&items, false).await.unwrap();
        let router = build_router(&app, &AllowedOrigins::new("127.0.0.1", 3000));

        let uri = "/api/v1/products?name=%C3%89TAG%C3%88RE";
        let (status, body) = get_json(router, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["étagère murale"]);
        assert_eq!(body["nbHits"], 1);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get_json(test_router().await, "/api/v1/orders").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let (status, body) = get_json(test_router().await, "/api/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/products"].is_object());
    }
}
