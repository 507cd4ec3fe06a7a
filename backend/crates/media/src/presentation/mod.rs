//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::UploadAppState;
pub use router::{serve_uploads, upload_router, upload_router_generic};
