//! Content (Posts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, slug/title/pagination/visitor value objects, repository traits
//! - `application/` - Use cases (create, get, list, update, delete, engagement)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Slugs derived from titles, unique via suffixes (`hello-world-1`)
//! - Publish lifecycle (`publishedAt` set on publish, cleared on unpublish)
//! - Paginated listing, newest first
//! - Owner attached to every read when the account still exists
//! - Unique views, likes (per account or anonymous fingerprint) and shares

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::ContentConfig;
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::{
    admin_posts_router, admin_posts_router_generic, posts_router, posts_router_generic,
};
