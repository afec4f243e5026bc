//! Health check handler

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use utoipa::ToSchema;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1786800000000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// There are no backing dependencies to probe; a response is the health.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp_ms: now_ms,
    })
}
