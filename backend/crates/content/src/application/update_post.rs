//! Update Post Use Case
//!
//! Patch semantics: only supplied fields change. A new title re-derives the
//! slug through the same suffix search as creation.

use std::sync::Arc;

use auth::domain::UserRepository;
use chrono::Utc;
use kernel::id::PostId;

use crate::application::author::{PostView, with_author};
use crate::application::config::ContentConfig;
use crate::application::slug_assignment::update_with_free_slug;
use crate::domain::entity::post::PostPatch;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_title::PostTitle;
use crate::error::{PostError, PostResult};

/// Update post input; `None` leaves the field untouched
#[derive(Default)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}

/// Update post use case
pub struct UpdatePostUseCase<R, U>
where
    R: PostRepository,
    U: UserRepository,
{
    posts: Arc<R>,
    users: Arc<U>,
    config: Arc<ContentConfig>,
}

impl<R, U> UpdatePostUseCase<R, U>
where
    R: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<R>, users: Arc<U>, config: Arc<ContentConfig>) -> Self {
        Self {
            posts,
            users,
            config,
        }
    }

    pub async fn execute(&self, post_id: &PostId, input: UpdatePostInput) -> PostResult<PostView> {
        let patch = PostPatch {
            title: input.title.map(PostTitle::new).transpose()?,
            content: input.content,
            excerpt: input.excerpt,
            cover_image: input.cover_image,
            published: input.published,
        };

        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        let title_changed = post.apply(patch, Utc::now());

        let found = if title_changed {
            update_with_free_slug(self.posts.as_ref(), &mut post, self.config.max_slug_attempts)
                .await?
        } else {
            self.posts.update(&post).await?
        };

        // Deleted between the read and the write
        if !found {
            return Err(PostError::NotFound);
        }

        tracing::info!(
            post_id = %post.post_id,
            slug = %post.slug,
            published = post.published,
            "Post updated"
        );

        with_author(self.users.as_ref(), post).await
    }
}
