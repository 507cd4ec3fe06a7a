//! HTTP Handlers

use auth::TokenCodec;
use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::{Field, Multipart, MultipartRejection};
use axum::extract::{FromRef, State};
use axum::http::{HeaderMap, header::CONTENT_LENGTH};
use std::sync::Arc;

use crate::application::{UploadConfig, UploadImageUseCase};
use crate::domain::store::{ChunkSource, UploadStore};
use crate::error::{UploadError, UploadResult};
use crate::presentation::dto::UploadResponse;

/// Form field carrying the file
pub const FILE_FIELD: &str = "file";

/// Shared state for upload handlers
#[derive(Clone)]
pub struct UploadAppState<S>
where
    S: UploadStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub tokens: Arc<TokenCodec>,
    pub config: Arc<UploadConfig>,
}

impl<S> FromRef<UploadAppState<S>> for Arc<TokenCodec>
where
    S: UploadStore + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &UploadAppState<S>) -> Self {
        state.tokens.clone()
    }
}

/// Multipart field read chunk by chunk
struct FieldSource<'a>(Field<'a>);

impl ChunkSource for FieldSource<'_> {
    type Chunk = Bytes;

    async fn next_chunk(&mut self) -> UploadResult<Option<Bytes>> {
        Ok(self.0.chunk().await?)
    }
}

/// POST /api/admin/upload
///
/// The file type is judged from the part headers before any size check, so
/// a disallowed file is reported as such whatever its size.
pub async fn upload<S>(
    State(state): State<UploadAppState<S>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> UploadResult<Json<UploadResponse>>
where
    S: UploadStore + Clone + Send + Sync + 'static,
{
    let declared = headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());

    let mut multipart = multipart?;
    let mut skipped: u64 = 0;

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            while let Some(chunk) = field.chunk().await? {
                skipped = skipped.saturating_add(chunk.len() as u64);
                if skipped > state.config.body_limit() {
                    return Err(UploadError::TooLarge);
                }
            }
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let use_case = UploadImageUseCase::new(state.store.clone(), state.config.clone());
        let image = use_case
            .execute(&original_name, declared, &mut FieldSource(field))
            .await?;

        return Ok(Json(UploadResponse::from(image)));
    }

    Err(UploadError::NoFile)
}
