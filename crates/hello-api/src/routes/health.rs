//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Liveness payload returned by `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

impl HealthStatus {
    pub const fn healthy() -> Self {
        Self {
            status: "healthy",
            message: "API is running",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// GET /health — liveness check.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
