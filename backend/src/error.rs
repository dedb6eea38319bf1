//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting:
//! `{ "error_code": ..., "message": ... }` with a status matching the error kind.

use crate::storage::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every server-side failure
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Message returned when a lookup or listing yields no rows
pub const RIDES_NOT_FOUND_MESSAGE: &str = "Could not find any rides";

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request input failed validation before any storage call
    #[error("{0}")]
    Validation(String),

    /// Storage succeeded but returned no rows
    #[error("{}", RIDES_NOT_FOUND_MESSAGE)]
    RidesNotFound,

    /// Error raised by the ride store
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Structured error body sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error kind
    pub error_code: String,
    /// Human-readable description
    pub message: String,
}

impl AppError {
    /// Stable error code exposed in the response body
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::RidesNotFound => "RIDES_NOT_FOUND_ERROR",
            AppError::Storage(_) | AppError::Internal(_) => "SERVER_ERROR",
        }
    }

    /// HTTP status for this error kind
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RidesNotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the caller. Server-side details never leave the process.
    pub fn body(&self) -> ErrorBody {
        let message = match self {
            AppError::Storage(_) | AppError::Internal(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        };

        ErrorBody {
            error_code: self.error_code().to_string(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Storage(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed with server error");
            }
            AppError::Validation(message) => {
                tracing::warn!(%message, "Request rejected by validation");
            }
            AppError::RidesNotFound => {
                tracing::debug!("No rides matched the request");
            }
        }

        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_mapping() {
        let error = AppError::Validation("Rider name must be a non empty string".to_string());
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error.body(),
            ErrorBody {
                error_code: "VALIDATION_ERROR".to_string(),
                message: "Rider name must be a non empty string".to_string(),
            }
        );
    }

    #[test]
    fn test_not_found_mapping() {
        let error = AppError::RidesNotFound;
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.body().error_code, "RIDES_NOT_FOUND_ERROR");
        assert_eq!(error.body().message, "Could not find any rides");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let error = AppError::Storage(StorageError::Query(sqlx::Error::RowNotFound));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body().error_code, "SERVER_ERROR");
        assert_eq!(error.body().message, "Unknown error");

        let error = AppError::Internal(anyhow::anyhow!("disk on fire"));
        assert_eq!(error.body().message, "Unknown error");
        assert!(error.to_string().contains("disk on fire"));
    }
}
