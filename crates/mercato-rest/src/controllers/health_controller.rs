//! Health check controller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Per-dependency health status.
#[derive(Debug, Serialize)]
pub struct DependencyStatus {
    pub database: &'static str,
    pub cache: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub dependencies: DependencyStatus,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
}

/// Health check endpoint.
///
/// Reports per-dependency status; the service is degraded (503) when the
/// database is unreachable. A cache outage alone keeps the service healthy
/// since the serving path degrades to the source of truth.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.database.health_check().await {
        Ok(()) => "up",
        Err(_) => "down",
    };
    let cache = if !state.cache.is_enabled() {
        "disabled"
    } else {
        match state.cache.ping().await {
            Ok(()) => "up",
            Err(_) => "down",
        }
    };

    let (status, code) = if database == "up" {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            dependencies: DependencyStatus { database, cache },
        }),
    )
}

/// Liveness check endpoint.
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
