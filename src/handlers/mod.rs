pub mod data;
pub mod echo;
pub mod user;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::{error::AppError, AppState};

pub const SERVICE_NAME: &str = "spa-api";

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "environment": state.config.environment,
            "service": SERVICE_NAME,
        })),
    )
}

/// Router fallback for any path no route matched.
pub async fn not_found() -> AppError {
    AppError::EndpointNotFound
}

/// Per-route fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
