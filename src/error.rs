//! Application error type and its mapping onto HTTP responses.
//!
//! Every layer returns [`AppError`]. Handlers never recover from it; the
//! [`IntoResponse`] impl turns it into a JSON body of the form:
//!
//! ```json
//! { "error": { "code": "decoding_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The request body or query string could not be turned into domain input.
    #[error("{message}")]
    Decoding { message: String, details: Value },

    /// The datastore failed on read or write.
    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn decoding(message: impl Into<String>, details: Value) -> Self {
        Self::Decoding {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decoding { .. } => StatusCode::BAD_REQUEST,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Decoding { .. } => "decoding_error",
            AppError::Storage { .. } => "storage_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Decoding { message, details } | AppError::Storage { message, details } => {
                (message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::storage("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::decoding(
            "Validation failed",
            serde_json::to_value(&errors).unwrap_or(Value::Null),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::decoding(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::decoding(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
