//! Request extractors whose rejections use the unified error body.

use axum::extract::FromRequest;

use crate::error::app_error::AppError;

/// `axum::Json` that rejects with [`AppError`] instead of plain text.
///
/// ```rust,ignore
/// async fn create(ApiJson(req): ApiJson<CreatePostRequest>) -> PostResult<...> { ... }
/// ```
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
