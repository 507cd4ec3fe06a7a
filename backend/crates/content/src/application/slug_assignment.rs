//! Unique Slug Assignment
//!
//! The unique index on `slug` is the arbiter: each candidate is written
//! directly and a `SlugTaken` rejection moves on to the next suffix, so two
//! concurrent posts with the same title can never share a slug.

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::slug::Slug;
use crate::error::{PostError, PostResult};

/// Insert `post`, giving it the lowest free slug for its title
pub(crate) async fn insert_with_free_slug<R>(
    repo: &R,
    post: &mut Post,
    max_attempts: usize,
) -> PostResult<()>
where
    R: PostRepository,
{
    let base = Slug::from_title(post.title.as_str());

    for candidate in base.candidates().take(max_attempts) {
        post.slug = candidate;
        match repo.insert(post).await {
            Ok(()) => return Ok(()),
            Err(PostError::SlugTaken) => {
                tracing::debug!(slug = %post.slug, "Slug taken, trying next suffix");
            }
            Err(e) => return Err(e),
        }
    }

    Err(PostError::SlugExhausted(base.to_string()))
}

/// Persist `post` after a title change, re-deriving its slug
///
/// The post's own current slug counts as free, so an unchanged base keeps
/// the slug it already has.
pub(crate) async fn update_with_free_slug<R>(
    repo: &R,
    post: &mut Post,
    max_attempts: usize,
) -> PostResult<bool>
where
    R: PostRepository,
{
    let base = Slug::from_title(post.title.as_str());

    for candidate in base.candidates().take(max_attempts) {
        post.slug = candidate;
        match repo.update(post).await {
            Ok(found) => return Ok(found),
            Err(PostError::SlugTaken) => {
                tracing::debug!(slug = %post.slug, "Slug taken, trying next suffix");
            }
            Err(e) => return Err(e),
        }
    }

    Err(PostError::SlugExhausted(base.to_string()))
}
