//! Content Error Types
//!
//! Post-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::database::QueryTimeout;
use thiserror::Error;

/// Content-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Post not found
    #[error("Post not found")]
    NotFound,

    /// Path id is not a UUID
    #[error("Invalid post ID")]
    InvalidId,

    /// `userId` filter is not a UUID
    #[error("Invalid user ID")]
    InvalidUserId,

    /// Like request without an action
    #[error("Missing action")]
    MissingAction,

    /// Action other than `like` / `unlike`
    #[error("Invalid action")]
    InvalidAction,

    /// The unique slug index rejected the write
    #[error("Slug already in use")]
    SlugTaken,

    /// Every suffix candidate for the base slug was taken
    #[error("Could not find a free slug for '{0}'")]
    SlugExhausted(String),

    /// Input validation failed (message is user facing)
    #[error("{}", .0.message())]
    Validation(AppError),

    /// Owner lookup failed
    #[error("Author lookup failed: {0}")]
    Author(#[from] AuthError),

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

impl PostError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::NotFound => ErrorKind::NotFound,
            PostError::InvalidId
            | PostError::InvalidUserId
            | PostError::MissingAction
            | PostError::InvalidAction => ErrorKind::BadRequest,
            PostError::SlugTaken | PostError::SlugExhausted(_) => ErrorKind::Conflict,
            PostError::Validation(err) => err.kind(),
            PostError::Author(_)
            | PostError::Database(_)
            | PostError::Timeout(_)
            | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; server-side detail stays in the log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            PostError::Validation(err) => {
                let app = AppError::new(err.kind(), err.message().to_string());
                match err.action() {
                    Some(action) => app.with_action(action.to_string()),
                    None => app,
                }
            }
            _ if self.kind().is_server_error() => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            PostError::Database(e) => tracing::error!(error = %e, "Content database error"),
            PostError::Timeout(e) => tracing::error!(error = %e, "Content database timeout"),
            PostError::Author(e) => tracing::error!(error = %e, "Content author lookup error"),
            PostError::Internal(msg) => tracing::error!(message = %msg, "Content internal error"),
            PostError::SlugExhausted(base) => {
                tracing::warn!(base = %base, "Slug suffixes exhausted")
            }
            _ => tracing::debug!(error = %self, "Content error"),
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PostError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            PostError::Validation(err)
        } else {
            PostError::Internal(err.to_string())
        }
    }
}
