//! Liveness handlers.

use axum::Json;
use serde::Serialize;

/// GET /
///
/// Liveness message, kept human-readable for quick curl checks.
pub async fn liveness() -> &'static str {
    "Job board server is running"
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
