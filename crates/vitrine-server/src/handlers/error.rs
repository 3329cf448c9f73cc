use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use vitrine_storage::{ErrorCategory, StorageError};

/// Error type for all route handlers.
///
/// Handlers catch at their own boundary: every storage or validation
/// failure is translated into the documented status codes here, and
/// internals are logged server-side without leaking into the body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Storage(err) => match err.category() {
                ErrorCategory::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
                ErrorCategory::Conflict | ErrorCategory::Validation => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                ErrorCategory::Internal => {
                    tracing::error!(error = %err, "storage failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Erro interno do servidor".to_string(),
                    )
                }
            },
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
