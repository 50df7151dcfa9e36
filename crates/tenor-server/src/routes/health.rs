//! Health check endpoint.

use axum::Json;
use serde::Serialize;
use tenor_analytics::tools::ToolKey;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Server version.
    pub version: &'static str,
    /// Number of catalog tools.
    pub tools: usize,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tools: ToolKey::ALL.len(),
    })
}
