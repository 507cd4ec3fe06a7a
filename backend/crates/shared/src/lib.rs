//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! credential, content, domain and upload crates:
//! - Common error types and result aliases
//! - Typed entity IDs (users, posts, domains)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all feature crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
