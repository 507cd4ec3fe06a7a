//! List Posts Use Case

use std::sync::Arc;

use auth::domain::UserRepository;

use crate::application::author::{PostView, with_authors};
use crate::domain::repository::{PostFilter, PostRepository};
use crate::domain::value_object::pagination::Pagination;
use crate::error::PostResult;

/// One page of posts
pub struct PostPage {
    pub posts: Vec<PostView>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

/// List posts use case
pub struct ListPostsUseCase<R, U>
where
    R: PostRepository,
    U: UserRepository,
{
    posts: Arc<R>,
    users: Arc<U>,
}

impl<R, U> ListPostsUseCase<R, U>
where
    R: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<R>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    pub async fn execute(&self, filter: PostFilter, page: Pagination) -> PostResult<PostPage> {
        let (posts, total) = self.posts.list(&filter, &page).await?;
        let posts = with_authors(self.users.as_ref(), posts).await?;

        Ok(PostPage {
            posts,
            total,
            page: page.page(),
            total_pages: page.total_pages(total),
        })
    }
}
