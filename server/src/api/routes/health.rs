//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::SqliteService;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the product store answered
    pub database: bool,
}

/// Build health route
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    Router::new().route("/", get(health)).with_state(database)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Product store unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(database): State<Arc<SqliteService>>) -> impl IntoResponse {
    let reachable = match sqlx::query("SELECT 1").execute(database.pool()).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check query failed");
            false
        }
    };

    let (status, label) = if reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status,
        Json(HealthResponse {
            status: label,
            version: env!("CARGO_PKG_VERSION"),
            database: reachable,
        }),
    )
}
