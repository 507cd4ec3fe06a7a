//! Create Post Use Case

use std::sync::Arc;

use auth::domain::UserRepository;
use kernel::id::UserId;

use crate::application::author::{PostView, with_author};
use crate::application::config::ContentConfig;
use crate::application::slug_assignment::insert_with_free_slug;
use crate::domain::entity::post::{NewPost, Post};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::post_title::PostTitle;
use crate::error::PostResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published: bool,
}

/// Create post use case
pub struct CreatePostUseCase<R, U>
where
    R: PostRepository,
    U: UserRepository,
{
    posts: Arc<R>,
    users: Arc<U>,
    config: Arc<ContentConfig>,
}

impl<R, U> CreatePostUseCase<R, U>
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

    pub async fn execute(&self, owner: UserId, input: CreatePostInput) -> PostResult<PostView> {
        let title = PostTitle::new(input.title)?;

        let mut post = Post::new(
            owner,
            NewPost {
                title,
                content: input.content,
                excerpt: input.excerpt,
                cover_image: input.cover_image,
                published: input.published,
            },
        );

        insert_with_free_slug(self.posts.as_ref(), &mut post, self.config.max_slug_attempts)
            .await?;

        tracing::info!(
            post_id = %post.post_id,
            slug = %post.slug,
            user_id = %post.user_id,
            published = post.published,
            "Post created"
        );

        with_author(self.users.as_ref(), post).await
    }
}
