//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod fingerprint;
pub mod handlers;
pub mod router;

pub use handlers::ContentAppState;
pub use router::{
    admin_posts_router, admin_posts_router_generic, posts_router, posts_router_generic,
};
