//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::store::StoreError;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Malformed or missing request field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Username already registered
    #[error("Username already exists")]
    UsernameTaken,

    /// Login failed (unknown user or wrong password, deliberately identical)
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No usable bearer credential on the request
    #[error("Missing or malformed bearer token")]
    MissingBearer,

    /// Token present but unresolvable after retries
    #[error("Invalid or expired token")]
    TokenUnresolved,

    /// Backing store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AccountError::UsernameTaken => StatusCode::CONFLICT,
            AccountError::InvalidCredentials | AccountError::MissingBearer => {
                StatusCode::UNAUTHORIZED
            }
            AccountError::TokenUnresolved => StatusCode::FORBIDDEN,
            AccountError::Store(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidInput(_) => ErrorKind::BadRequest,
            AccountError::UsernameTaken => ErrorKind::Conflict,
            AccountError::InvalidCredentials | AccountError::MissingBearer => {
                ErrorKind::Unauthorized
            }
            AccountError::TokenUnresolved => ErrorKind::Forbidden,
            AccountError::Store(_) | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Store and internal failures render with a generic message; their
    /// detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Store(_) | AccountError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Store(e) => {
                tracing::error!(error = %e, "Backing store error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::TokenUnresolved => {
                tracing::warn!("Unresolvable bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}
