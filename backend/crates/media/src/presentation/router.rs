//! Upload Routers

use auth::{TokenCodec, require_bearer};
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::application::config::UploadConfig;
use crate::domain::store::UploadStore;
use crate::infra::disk::DiskStore;
use crate::presentation::handlers::{self, UploadAppState};

/// Create the upload router writing to the local upload directory
pub fn upload_router(store: DiskStore, tokens: Arc<TokenCodec>, config: UploadConfig) -> Router {
    upload_router_generic(store, tokens, config)
}

/// Create the upload router for any store implementation
pub fn upload_router_generic<S>(store: S, tokens: Arc<TokenCodec>, config: UploadConfig) -> Router
where
    S: UploadStore + Clone + Send + Sync + 'static,
{
    let state = UploadAppState {
        store: Arc::new(store),
        tokens: tokens.clone(),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::upload::<S>))
        // Size is enforced by the handler once the file type is known
        .layer(DefaultBodyLimit::disable())
        .route_layer(require_bearer(tokens))
        .with_state(state)
}

/// Static service for stored uploads, mounted at the public prefix
pub fn serve_uploads(config: &UploadConfig) -> ServeDir {
    ServeDir::new(&config.dir)
}
