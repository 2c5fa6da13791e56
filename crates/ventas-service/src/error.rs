//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::render;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request - invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, render::error_page(status, &message)).into_response()
    }
}

impl From<ventas_store::StoreError> for ApiError {
    fn from(err: ventas_store::StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<ventas_model::ModelError> for ApiError {
    fn from(err: ventas_model::ModelError) -> Self {
        Self::Internal(err.to_string())
    }
}
