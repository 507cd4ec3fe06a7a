//! Application Layer

pub mod config;
pub mod upload_image;

pub use config::UploadConfig;
pub use upload_image::UploadImageUseCase;
