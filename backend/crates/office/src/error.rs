//! Office Error Types
//!
//! This module provides editor-bridge error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::jwt::JwtError;
use thiserror::Error;

/// Office-specific result type alias
pub type OfficeResult<T> = Result<T, OfficeError>;

#[derive(Debug, Error)]
pub enum OfficeError {
    /// Required query or body parameter is absent
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// File has no extension the editor could use
    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    /// Document server is not configured
    #[error("Document server is not configured")]
    NotConfigured,

    /// Callback arrived without a token while signing is enabled
    #[error("Missing callback token")]
    MissingToken,

    /// Callback token failed verification
    #[error("Invalid callback token: {0}")]
    InvalidToken(#[source] JwtError),

    /// URL could not be parsed or is not http(s)
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Save target is outside the allowed domain
    #[error("Save target not allowed: {0}")]
    TargetNotAllowed(String),

    /// Document server or file server answered with an error
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Document server or file server did not answer in time
    #[error("Upstream timeout")]
    UpstreamTimeout,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OfficeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            OfficeError::MissingParameter(_) | OfficeError::InvalidUrl(_) => ErrorKind::BadRequest,
            OfficeError::UnsupportedFile(_) => ErrorKind::UnprocessableEntity,
            OfficeError::NotConfigured => ErrorKind::ServiceUnavailable,
            OfficeError::MissingToken | OfficeError::InvalidToken(_) => ErrorKind::Unauthorized,
            OfficeError::TargetNotAllowed(_) => ErrorKind::Forbidden,
            OfficeError::Upstream(_) => ErrorKind::BadGateway,
            OfficeError::UpstreamTimeout => ErrorKind::GatewayTimeout,
            OfficeError::Json(_) | OfficeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            OfficeError::NotConfigured => AppError::service_unavailable(self.to_string())
                .with_action("Set ONLYOFFICE_SERVER and restart the service"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            OfficeError::Upstream(msg) => {
                tracing::error!(message = %msg, "Document transfer failed");
            }
            OfficeError::UpstreamTimeout => {
                tracing::error!("Document transfer timed out");
            }
            OfficeError::Json(e) => {
                tracing::error!(error = %e, "Editor config serialization error");
            }
            OfficeError::Internal(msg) => {
                tracing::error!(message = %msg, "Office internal error");
            }
            OfficeError::MissingToken | OfficeError::InvalidToken(_) => {
                tracing::warn!(error = %self, "Rejected document server callback");
            }
            OfficeError::TargetNotAllowed(target) => {
                tracing::warn!(target = %target, "Save target outside allowed domain");
            }
            OfficeError::NotConfigured => {
                tracing::warn!("Editor requested but document server is not configured");
            }
            _ => {
                tracing::debug!(error = %self, "Office error");
            }
        }
    }
}

impl From<OfficeError> for AppError {
    fn from(err: OfficeError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for OfficeError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<reqwest::Error> for OfficeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OfficeError::UpstreamTimeout
        } else {
            OfficeError::Upstream(err.to_string())
        }
    }
}

impl From<url::ParseError> for OfficeError {
    fn from(err: url::ParseError) -> Self {
        OfficeError::InvalidUrl(err.to_string())
    }
}
