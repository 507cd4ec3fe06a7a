//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::value_object::{pagination::Pagination, slug::Slug, visitor::Visitor};
use crate::error::PostResult;

/// List filter; `None` means "any"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub published: Option<bool>,
    pub user_id: Option<UserId>,
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Insert a new post
    ///
    /// Fails with `PostError::SlugTaken` when another post holds the slug.
    async fn insert(&self, post: &Post) -> PostResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// Find post by slug
    async fn find_by_slug(&self, slug: &Slug) -> PostResult<Option<Post>>;

    /// One page (newest first) plus the total number of matches
    async fn list(&self, filter: &PostFilter, page: &Pagination) -> PostResult<(Vec<Post>, i64)>;

    /// Overwrite every mutable column
    ///
    /// Returns `false` when the post no longer exists; fails with
    /// `PostError::SlugTaken` when another post holds the slug.
    async fn update(&self, post: &Post) -> PostResult<bool>;

    /// Delete by ID; returns `false` when nothing was deleted
    async fn delete(&self, post_id: &PostId) -> PostResult<bool>;
}

/// Reader engagement: unique views, likes and shares
///
/// Each call adjusts the post's counter in the same statement that records
/// the visitor, so counters never drift from the recorded rows.
#[trait_variant::make(EngagementRepository: Send)]
pub trait LocalEngagementRepository {
    /// Count a view once per visitor; `false` when already counted
    async fn record_view(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool>;

    /// `false` when the visitor already likes the post
    async fn add_like(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool>;

    /// `false` when there was no like to remove
    async fn remove_like(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool>;

    /// Shares are not deduplicated
    async fn record_share(&self, post_id: &PostId) -> PostResult<()>;
}
