//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    posts: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(posts: Arc<R>) -> Self {
        Self { posts }
    }

    pub async fn execute(&self, post_id: &PostId) -> PostResult<()> {
        if !self.posts.delete(post_id).await? {
            return Err(PostError::NotFound);
        }

        tracing::info!(post_id = %post_id, "Post deleted");
        Ok(())
    }
}
