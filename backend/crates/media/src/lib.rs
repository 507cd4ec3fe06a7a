//! Media (Uploads) Backend Module
//!
//! - `domain/` - Extension allow-list, generated file names, store traits
//! - `application/` - Upload use case and config
//! - `infra/` - Local disk store
//! - `presentation/` - Multipart handler, upload router, static serving
//!
//! Uploads are flat files named `<uuid>.<ext>`; no metadata is recorded.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::UploadConfig;
pub use error::{UploadError, UploadResult};
pub use infra::disk::DiskStore;
pub use presentation::router::{serve_uploads, upload_router, upload_router_generic};
