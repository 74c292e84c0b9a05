//! Health check and service metadata endpoints.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Service name and version returned from the root URL.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// { "status": "OK" }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}

/// Root URL handler.
///
/// # Response (200 OK)
///
/// ```json
/// { "name": "Account REST API Service", "version": "1.0" }
/// ```
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Account REST API Service",
        version: "1.0",
    })
}
