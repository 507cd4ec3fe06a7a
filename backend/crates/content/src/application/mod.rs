//! Application Layer
//!
//! Use cases and application services.

pub mod author;
pub mod config;
pub mod create_post;
pub mod delete_post;
pub mod engagement;
pub mod get_post;
pub mod list_posts;
mod slug_assignment;
pub mod update_post;

// Re-exports
pub use author::PostView;
pub use config::ContentConfig;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use engagement::{EngagementUseCase, LikeAction, Recorded};
pub use get_post::GetPostUseCase;
pub use list_posts::{ListPostsUseCase, PostPage};
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
