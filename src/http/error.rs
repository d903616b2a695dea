//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::services::booking::BookingError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// The requested write lost a race or hit a taken slot
    Conflict(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::NotFound(msg) => ApiError::new("NOT_FOUND", msg),
            AppError::BadRequest(msg) => ApiError::new("BAD_REQUEST", msg),
            AppError::Conflict(msg) => ApiError::new("CONFLICT", msg),
            AppError::Internal(msg) => ApiError::new("INTERNAL_ERROR", msg),
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => AppError::NotFound(err.to_string()),
            RepositoryError::Validation { .. } => AppError::BadRequest(err.to_string()),
            RepositoryError::Conflict { .. } => AppError::Conflict(err.to_string()),
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::AlreadySubmitting => AppError::Conflict(err.to_string()),
            BookingError::Validation(msg) => AppError::BadRequest(msg),
            BookingError::NotFound(msg) => AppError::NotFound(msg),
            BookingError::Conflict(msg) => AppError::Conflict(msg),
            BookingError::Transport(msg) => AppError::Internal(msg),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_status_mapping() {
        let err: AppError = RepositoryError::not_found("block 9").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: AppError = RepositoryError::validation("bad time range").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: AppError = RepositoryError::conflict("slot taken").into();
        assert_eq!(err.status(), StatusCode::CONFLICT);

        let err: AppError = RepositoryError::internal("boom").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_booking_error_status_mapping() {
        let err: AppError = BookingError::AlreadySubmitting.into();
        assert_eq!(err.status(), StatusCode::CONFLICT);

        let err: AppError = BookingError::Validation("empty name".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_body_shape() {
        let body = ApiError::new("CONFLICT", "slot taken").with_details("block 2");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "CONFLICT");
        assert_eq!(json["details"], "block 2");

        let body = ApiError::new("NOT_FOUND", "nope");
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }
}
