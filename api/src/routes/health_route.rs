//! GET /health — liveness only; does not probe the completion endpoint.

use axum::Json;
use chrono::Local;
use serde::Serialize;

/// Liveness snapshot.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// ISO-8601 local time with microseconds.
    pub timestamp: String,
}

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    })
}
