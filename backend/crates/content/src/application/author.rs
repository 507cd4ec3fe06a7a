//! Owner Resolution
//!
//! Reads attach the owning user when it still exists. A missing owner is
//! not an error; a failing lookup is.

use std::collections::HashMap;

use auth::domain::{User, UserRepository};
use kernel::id::UserId;

use crate::domain::entity::post::Post;
use crate::error::PostResult;

/// A post with its owner, if the owner could be found
#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub author: Option<User>,
}

pub(crate) async fn with_author<U>(users: &U, post: Post) -> PostResult<PostView>
where
    U: UserRepository,
{
    let author = users.find_by_id(&post.user_id).await?;
    Ok(PostView { post, author })
}

/// Resolve owners for a page of posts, one lookup per distinct owner
pub(crate) async fn with_authors<U>(users: &U, posts: Vec<Post>) -> PostResult<Vec<PostView>>
where
    U: UserRepository,
{
    let mut authors: HashMap<UserId, Option<User>> = HashMap::new();
    let mut views = Vec::with_capacity(posts.len());

    for post in posts {
        let author = match authors.get(&post.user_id) {
            Some(cached) => cached.clone(),
            None => {
                let found = users.find_by_id(&post.user_id).await?;
                authors.insert(post.user_id, found.clone());
                found
            }
        };
        views.push(PostView { post, author });
    }

    Ok(views)
}
