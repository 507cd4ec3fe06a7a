//! Custom Domain Router

use auth::{TokenCodec, require_bearer};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::DomainConfig;
use crate::domain::repository::DomainRepository;
use crate::domain::resolver::TxtResolver;
use crate::infra::{dns::HickoryTxtResolver, postgres::PgDomainRepository};
use crate::presentation::handlers::{self, DomainAppState};

/// Create the domain router with PostgreSQL and the system DNS resolver
pub fn domains_router(
    repo: PgDomainRepository,
    resolver: HickoryTxtResolver,
    tokens: Arc<TokenCodec>,
    config: DomainConfig,
) -> Router {
    domains_router_generic(repo, resolver, tokens, config)
}

/// Create the domain router for any repository and resolver implementation
pub fn domains_router_generic<R, D>(
    repo: R,
    resolver: D,
    tokens: Arc<TokenCodec>,
    config: DomainConfig,
) -> Router
where
    R: DomainRepository + Clone + Send + Sync + 'static,
    D: TxtResolver + Clone + Send + Sync + 'static,
{
    let state = DomainAppState {
        repo: Arc::new(repo),
        resolver: Arc::new(resolver),
        tokens: tokens.clone(),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list::<R, D>).post(handlers::create::<R, D>),
        )
        .route(
            "/{id}",
            get(handlers::get::<R, D>).delete(handlers::delete::<R, D>),
        )
        .route("/{id}/verify", post(handlers::verify::<R, D>))
        .route_layer(require_bearer(tokens))
        .with_state(state)
}
