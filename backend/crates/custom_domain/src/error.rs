//! Custom Domain Error Types
//!
//! Domain-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::database::QueryTimeout;
use thiserror::Error;

/// Custom domain result type alias
pub type DomainResult<T> = Result<T, DomainError>;

/// Why a DNS ownership check did not pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    /// The resolver returned an error (NXDOMAIN, timeout, SERVFAIL, ...)
    #[error("Could not look up DNS records")]
    LookupFailed,

    /// Records were found but none carried the token
    #[error("Verification token not found in DNS")]
    TokenMissing,
}

/// Custom domain error variants
#[derive(Debug, Error)]
pub enum DomainError {
    /// Domain not found (or, for deletes, not owned by the caller)
    #[error("Domain not found")]
    NotFound,

    /// Path id is not a UUID
    #[error("Invalid domain ID")]
    InvalidId,

    /// The caller does not own the domain
    #[error("Access denied")]
    AccessDenied,

    /// Someone already registered this name
    #[error("Domain already registered")]
    DomainTaken,

    /// DNS check did not pass; the domain stays unverified
    #[error(transparent)]
    VerificationFailed(VerificationFailure),

    /// Input validation failed (message is user facing)
    #[error("{}", .0.message())]
    Validation(AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Database call exceeded its deadline
    #[error(transparent)]
    Timeout(#[from] QueryTimeout),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound => ErrorKind::NotFound,
            DomainError::InvalidId | DomainError::VerificationFailed(_) => ErrorKind::BadRequest,
            DomainError::AccessDenied => ErrorKind::Forbidden,
            DomainError::DomainTaken => ErrorKind::Conflict,
            DomainError::Validation(err) => err.kind(),
            DomainError::Database(_) | DomainError::Timeout(_) | DomainError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            DomainError::Validation(err) => {
                let app = AppError::new(err.kind(), err.message().to_string());
                match err.action() {
                    Some(action) => app.with_action(action.to_string()),
                    None => app,
                }
            }
            DomainError::VerificationFailed(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Publish the TXT record from the instructions, then retry"),
            _ if self.kind().is_server_error() => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            DomainError::Database(e) => {
                tracing::error!(error = %e, "Domain database error");
            }
            DomainError::Timeout(e) => {
                tracing::error!(error = %e, "Domain database timeout");
            }
            DomainError::Internal(msg) => {
                tracing::error!(message = %msg, "Domain internal error");
            }
            DomainError::AccessDenied => {
                tracing::warn!("Domain access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Domain error");
            }
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            DomainError::Validation(err)
        } else {
            DomainError::Internal(err.to_string())
        }
    }
}
