use axum::{http::StatusCode, Json};

use crate::core::error::AppError;

pub const WELCOME_MESSAGE: &str = "welcome to the server";

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = String),
    ),
    tag = "home"
)]
pub async fn welcome() -> Json<&'static str> {
    Json(WELCOME_MESSAGE)
}

/// Simple health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Fallback for unknown paths
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
