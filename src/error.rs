use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

/// Every failure a handler can surface. Each variant maps to one fixed JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Item not found")]
    ItemNotFound,

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ItemNotFound | AppError::EndpointNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_share_status() {
        assert_eq!(AppError::ItemNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::EndpointNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(AppError::MethodNotAllowed.to_string(), "Method not allowed");
    }

    #[test]
    fn bad_request_message_is_public() {
        let err = AppError::BadRequest("Malformed JSON body".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Malformed JSON body");
    }

    #[test]
    fn internal_maps_to_500() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
