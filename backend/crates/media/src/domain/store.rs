//! Storage Traits

use crate::domain::image::StoredName;
use crate::error::UploadResult;

/// Where accepted uploads are written
#[trait_variant::make(UploadStore: Send)]
pub trait LocalUploadStore {
    /// An open, partially written file
    type Sink: Send;

    /// Create a new, empty file; never overwrites
    async fn create(&self, name: &StoredName) -> UploadResult<Self::Sink>;

    async fn append(&self, sink: &mut Self::Sink, bytes: &[u8]) -> UploadResult<()>;

    /// Flush and keep the file
    async fn commit(&self, sink: Self::Sink) -> UploadResult<()>;

    /// Remove a partially written file
    async fn discard(&self, sink: Self::Sink);
}

/// The incoming file, read chunk by chunk
#[trait_variant::make(ChunkSource: Send)]
pub trait LocalChunkSource {
    type Chunk: AsRef<[u8]> + Send;

    /// `None` once the file has been read completely
    async fn next_chunk(&mut self) -> UploadResult<Option<Self::Chunk>>;
}
