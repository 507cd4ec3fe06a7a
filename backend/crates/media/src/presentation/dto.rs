//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::image::UploadedImage;

/// `{"url": "/uploads/<name>", "filename": "<name>"}`
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
}

impl From<UploadedImage> for UploadResponse {
    fn from(image: UploadedImage) -> Self {
        Self {
            url: image.url,
            filename: image.filename,
        }
    }
}
