//! Engagement Use Cases
//!
//! Public reader actions on a post addressed by slug: a unique view, a like
//! or unlike, and a share. Each resolves the slug first so an unknown post
//! is `NotFound` rather than a silent no-op.

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::repository::{EngagementRepository, PostRepository};
use crate::domain::value_object::{slug::Slug, visitor::Visitor};
use crate::error::{PostError, PostResult};

/// Whether a reader action changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    New,
    Repeat,
}

impl From<bool> for Recorded {
    fn from(changed: bool) -> Self {
        if changed { Self::New } else { Self::Repeat }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

impl LikeAction {
    /// Parse the wire value (`"like"` / `"unlike"`)
    pub fn parse(raw: Option<&str>) -> PostResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Err(PostError::MissingAction),
            Some("like") => Ok(Self::Like),
            Some("unlike") => Ok(Self::Unlike),
            Some(_) => Err(PostError::InvalidAction),
        }
    }
}

/// Public view, like and share counters
pub struct EngagementUseCase<R>
where
    R: PostRepository + EngagementRepository,
{
    posts: Arc<R>,
}

impl<R> EngagementUseCase<R>
where
    R: PostRepository + EngagementRepository,
{
    pub fn new(posts: Arc<R>) -> Self {
        Self { posts }
    }

    async fn resolve(&self, slug: &str) -> PostResult<PostId> {
        self.posts
            .find_by_slug(&Slug::from_db(slug))
            .await?
            .map(|post| post.post_id)
            .ok_or(PostError::NotFound)
    }

    /// Count one view per visitor
    pub async fn view(&self, slug: &str, visitor: &Visitor) -> PostResult<Recorded> {
        let post_id = self.resolve(slug).await?;
        let recorded = Recorded::from(self.posts.record_view(&post_id, visitor).await?);

        tracing::debug!(post_id = %post_id, recorded = ?recorded, "Post view");
        Ok(recorded)
    }

    /// Like or unlike; repeating either is a no-op reported as `Repeat`.
    pub async fn like(
        &self,
        slug: &str,
        visitor: &Visitor,
        action: LikeAction,
    ) -> PostResult<Recorded> {
        let post_id = self.resolve(slug).await?;
        let changed = match action {
            LikeAction::Like => self.posts.add_like(&post_id, visitor).await?,
            LikeAction::Unlike => self.posts.remove_like(&post_id, visitor).await?,
        };
        let recorded = Recorded::from(changed);

        tracing::debug!(post_id = %post_id, action = ?action, recorded = ?recorded, "Post like");
        Ok(recorded)
    }

    /// Every share counts
    pub async fn share(&self, slug: &str) -> PostResult<()> {
        let post_id = self.resolve(slug).await?;
        self.posts.record_share(&post_id).await?;

        tracing::debug!(post_id = %post_id, "Post shared");
        Ok(())
    }
}
