//! Upload Image Use Case
//!
//! Checks run in order: extension, declared request size (against the body
//! limit, which leaves room for multipart framing), then the streamed byte
//! count while writing. A file that crosses the limit mid-stream is removed.

use std::sync::Arc;

use crate::application::config::UploadConfig;
use crate::domain::image::{ImageExtension, StoredName, UploadedImage};
use crate::domain::store::{ChunkSource, UploadStore};
use crate::error::{UploadError, UploadResult};

/// Upload image use case
pub struct UploadImageUseCase<S>
where
    S: UploadStore,
{
    store: Arc<S>,
    config: Arc<UploadConfig>,
}

impl<S> UploadImageUseCase<S>
where
    S: UploadStore,
{
    pub fn new(store: Arc<S>, config: Arc<UploadConfig>) -> Self {
        Self { store, config }
    }

    /// `declared_size` is the request `Content-Length`, when the client sent one.
    pub async fn execute<C>(
        &self,
        original_name: &str,
        declared_size: Option<u64>,
        source: &mut C,
    ) -> UploadResult<UploadedImage>
    where
        C: ChunkSource,
    {
        let ext = ImageExtension::from_filename(original_name)?;

        if declared_size.is_some_and(|size| size > self.config.body_limit()) {
            return Err(UploadError::TooLarge);
        }

        let name = StoredName::generate(ext);
        let mut sink = self.store.create(&name).await?;

        match self.copy(source, &mut sink).await {
            Ok(written) => {
                self.store.commit(sink).await?;

                tracing::info!(filename = %name, bytes = written, "Image uploaded");

                Ok(UploadedImage {
                    url: self.config.public_url(name.as_str()),
                    filename: name.to_string(),
                })
            }
            Err(e) => {
                self.store.discard(sink).await;
                Err(e)
            }
        }
    }

    async fn copy<C>(&self, source: &mut C, sink: &mut S::Sink) -> UploadResult<u64>
    where
        C: ChunkSource,
    {
        let mut written: u64 = 0;

        while let Some(chunk) = source.next_chunk().await? {
            let bytes = chunk.as_ref();
            written = written.saturating_add(bytes.len() as u64);
            if written > self.config.max_file_size {
                return Err(UploadError::TooLarge);
            }
            self.store.append(sink, bytes).await?;
        }

        Ok(written)
    }
}
