use axum::Json;

use vitals_core::HealthResponse;

/// Liveness check endpoint.
///
/// Always reports healthy while the process can answer HTTP. The request
/// body, if any, is ignored.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::HEALTHY)
}
