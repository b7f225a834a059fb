use axum::Json;
use cndr_core::{ApiResponse, HealthStatus};

pub async fn health() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(HealthStatus::ok()))
}
