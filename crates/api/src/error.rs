//! Unified error handling with Sentry integration.
//!
//! Handlers return `Result<T, AppError>`. Validation and not-found errors
//! carry a client-facing message; everything else collapses into one generic
//! 500 response after being logged and captured to Sentry.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use golden_bowl_core::{IdError, MissingFields};

use crate::store::StoreError;

/// Message sent for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A path identifier is not a valid store identifier.
    ///
    /// Reported to clients as a server error, not a distinct bad-id error.
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or falsy required input.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl AppError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(_) | Self::InvalidId(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match self {
            Self::NotFound(message) | Self::BadRequest(message) => message,
            Self::Store(_) | Self::InvalidId(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

impl From<MissingFields> for AppError {
    fn from(err: MissingFields) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
