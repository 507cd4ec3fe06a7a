//! Upload Error Types

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Upload result type alias
pub type UploadResult<T> = Result<T, UploadError>;

/// Upload error variants
#[derive(Debug, Error)]
pub enum UploadError {
    /// No `file` part in the form
    #[error("No file uploaded")]
    NoFile,

    /// Extension outside the allow-list
    #[error("Invalid file type. Allowed: jpg, jpeg, png, gif, webp")]
    InvalidType,

    /// Declared or streamed size over the limit
    #[error("File too large. Max 10MB")]
    TooLarge,

    /// Not a readable multipart body
    #[error("Invalid upload: {0}")]
    Malformed(String),

    /// Writing to the upload directory failed
    #[error("Failed to save file: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UploadError::NoFile
            | UploadError::InvalidType
            | UploadError::TooLarge
            | UploadError::Malformed(_) => ErrorKind::BadRequest,
            UploadError::Io(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    fn log(&self) {
        match self {
            UploadError::Io(e) => tracing::error!(error = %e, "Failed to save upload"),
            _ => tracing::debug!(error = %self, "Upload rejected"),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<MultipartError> for UploadError {
    fn from(err: MultipartError) -> Self {
        // A body limit from an enclosing layer surfaces as a multipart read error
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge
        } else {
            UploadError::Malformed(err.body_text())
        }
    }
}

impl From<MultipartRejection> for UploadError {
    fn from(rejection: MultipartRejection) -> Self {
        UploadError::Malformed(rejection.body_text())
    }
}
