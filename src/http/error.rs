//! Error type for HTTP handlers and its JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldError, ValidationErrors};
use crate::storage::StorageError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Submitted data failed field validation.
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// A looked-up record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request itself is malformed (bad path parameter and the like).
    #[error("{0}")]
    BadRequest(String),

    /// The store failed. `message` is the only thing the caller sees.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ApiError {
    /// Adapter for `map_err` that wraps a store failure with the generic
    /// message shown for this route.
    pub fn internal(message: &'static str) -> impl FnOnce(StorageError) -> ApiError {
        move |source| ApiError::Internal { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = match &self {
            ApiError::Validation(errors) => Some(errors.errors().to_vec()),
            ApiError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
                None
            }
            _ => None,
        };

        let body = ErrorBody {
            message: self.to_string(),
            errors,
        };
        (status, Json(body)).into_response()
    }
}
