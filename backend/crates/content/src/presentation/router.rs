//! Content Routers
//!
//! Two routers: the public side (mounted at `/api/posts`: reads plus the
//! view, like and share counters) and the bearer-gated admin side (mounted
//! at `/api/admin/posts`).

use auth::domain::UserRepository;
use auth::{PgUserRepository, TokenCodec, require_bearer};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::ContentConfig;
use crate::domain::repository::{EngagementRepository, PostRepository};
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Public post routes with PostgreSQL repositories
pub fn posts_router(
    posts: PgPostRepository,
    users: PgUserRepository,
    tokens: Arc<TokenCodec>,
    config: ContentConfig,
) -> Router {
    posts_router_generic(posts, users, tokens, config)
}

/// Admin post routes with PostgreSQL repositories
pub fn admin_posts_router(
    posts: PgPostRepository,
    users: PgUserRepository,
    tokens: Arc<TokenCodec>,
    config: ContentConfig,
) -> Router {
    admin_posts_router_generic(posts, users, tokens, config)
}

/// Public post routes for any repository implementation
pub fn posts_router_generic<R, U>(
    posts: R,
    users: U,
    tokens: Arc<TokenCodec>,
    config: ContentConfig,
) -> Router
where
    R: PostRepository + EngagementRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        posts: Arc::new(posts),
        users: Arc::new(users),
        tokens,
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_published::<R, U>))
        .route("/{slug}", get(handlers::get_by_slug::<R, U>))
        .route("/{slug}/view", post(handlers::record_view::<R, U>))
        .route("/{slug}/like", post(handlers::like::<R, U>))
        .route("/{slug}/share", post(handlers::share::<R, U>))
        .with_state(state)
}

/// Admin post routes for any repository implementation
pub fn admin_posts_router_generic<R, U>(
    posts: R,
    users: U,
    tokens: Arc<TokenCodec>,
    config: ContentConfig,
) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        posts: Arc::new(posts),
        users: Arc::new(users),
        tokens: tokens.clone(),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_all::<R, U>).post(handlers::create::<R, U>),
        )
        .route(
            "/{id}",
            get(handlers::get_by_id::<R, U>)
                .put(handlers::update::<R, U>)
                .delete(handlers::delete::<R, U>),
        )
        .route_layer(require_bearer(tokens))
        .with_state(state)
}
