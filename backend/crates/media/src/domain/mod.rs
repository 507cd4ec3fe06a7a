//! Domain Layer

pub mod image;
pub mod store;

pub use image::{ImageExtension, StoredName, UploadedImage};
pub use store::{ChunkSource, UploadStore};
