//! Get Post Use Case

use std::sync::Arc;

use auth::domain::UserRepository;
use kernel::id::PostId;

use crate::application::author::{PostView, with_author};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::slug::Slug;
use crate::error::{PostError, PostResult};

/// Fetches a single post by id or slug, regardless of published state
pub struct GetPostUseCase<R, U>
where
    R: PostRepository,
    U: UserRepository,
{
    posts: Arc<R>,
    users: Arc<U>,
}

impl<R, U> GetPostUseCase<R, U>
where
    R: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<R>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    pub async fn by_id(&self, post_id: &PostId) -> PostResult<PostView> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;
        with_author(self.users.as_ref(), post).await
    }

    pub async fn by_slug(&self, slug: &str) -> PostResult<PostView> {
        let post = self
            .posts
            .find_by_slug(&Slug::from_db(slug))
            .await?
            .ok_or(PostError::NotFound)?;
        with_author(self.users.as_ref(), post).await
    }
}
