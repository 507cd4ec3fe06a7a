//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::post::{NewPost, Post, PostPatch, PostStats};
pub use repository::{EngagementRepository, PostFilter, PostRepository};
pub use value_object::visitor::Visitor;
