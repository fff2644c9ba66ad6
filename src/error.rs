//! Application error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::repositories::StorageError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by services and handlers.
///
/// Rendered as `{"error": "<message>"}` with the matching status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed body, missing required field or wrongly typed field (400).
    #[error("{message}")]
    Validation { message: String },

    /// Primary, parent or referenced entity does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Storage backend failure (500). The cause is logged, never returned.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound {
            message: "Not found".to_string(),
        }
    }

    /// Body is absent, not JSON, or not a JSON object.
    pub fn not_a_json() -> Self {
        Self::bad_request("Not a JSON")
    }

    /// A required field is absent from the body.
    pub fn missing(field: &str) -> Self {
        Self::bad_request(format!("Missing {field}"))
    }

    /// A known field is present with the wrong JSON type.
    pub fn invalid(field: &str) -> Self {
        Self::bad_request(format!("Invalid {field}"))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Validation { message } | AppError::NotFound { message } => message,
            AppError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
