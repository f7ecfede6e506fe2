//! Health check and service root endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ApiInfo {
    /// Service status message
    pub message: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = String, content_type = "text/plain")
    )
)]
pub async fn health_check() -> &'static str {
    "ok"
}

/// Service root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = ApiInfo)
    )
)]
pub async fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "API is running".to_string(),
    })
}
