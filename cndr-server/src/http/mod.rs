mod health;
mod users;

pub use health::*;
pub use users::*;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use cndr_core::ApiResponse;

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::err("Not Found")),
    )
}
