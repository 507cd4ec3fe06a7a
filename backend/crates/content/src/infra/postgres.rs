//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::{is_unique_violation, violated_constraint};
use kernel::id::{PostId, UserId};
use platform::database::bounded;
use sqlx::PgPool;
use std::future::Future;
use uuid::Uuid;

use crate::domain::entity::post::{Post, PostStats};
use crate::domain::repository::{EngagementRepository, PostFilter, PostRepository};
use crate::domain::value_object::{
    pagination::Pagination, post_title::PostTitle, slug::Slug, visitor::Visitor,
};
use crate::error::{PostError, PostResult};

/// Name of the unique index on `posts.slug`
const SLUG_CONSTRAINT: &str = "posts_slug_key";

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Run a query under the shared database deadline
async fn timed<T>(query: impl Future<Output = Result<T, sqlx::Error>>) -> PostResult<T> {
    bounded(query).await
}

/// Turn a slug unique violation into `SlugTaken`
fn slug_conflict(err: PostError) -> PostError {
    match err {
        PostError::Database(e)
            if is_unique_violation(&e) && violated_constraint(&e) == Some(SLUG_CONSTRAINT) =>
        {
            PostError::SlugTaken
        }
        other => other,
    }
}

const SELECT_POST: &str = r#"
    SELECT
        post_id,
        title,
        slug,
        content,
        excerpt,
        cover_image,
        published,
        published_at,
        user_id,
        views,
        likes,
        shares,
        created_at,
        updated_at
    FROM posts
"#;

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgPostRepository {
    async fn insert(&self, post: &Post) -> PostResult<()> {
        timed(
            sqlx::query(
                r#"
                INSERT INTO posts (
                    post_id,
                    title,
                    slug,
                    content,
                    excerpt,
                    cover_image,
                    published,
                    published_at,
                    user_id,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(post.post_id.as_uuid())
            .bind(post.title.as_str())
            .bind(post.slug.as_str())
            .bind(&post.content)
            .bind(&post.excerpt)
            .bind(&post.cover_image)
            .bind(post.published)
            .bind(post.published_at)
            .bind(post.user_id.as_uuid())
            .bind(post.created_at)
            .bind(post.updated_at)
            .execute(&self.pool),
        )
        .await
        .map_err(slug_conflict)?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let sql = format!("{SELECT_POST} WHERE post_id = $1");
        let row = timed(
            sqlx::query_as::<_, PostRow>(&sql)
                .bind(post_id.as_uuid())
                .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_by_slug(&self, slug: &Slug) -> PostResult<Option<Post>> {
        let sql = format!("{SELECT_POST} WHERE slug = $1");
        let row = timed(
            sqlx::query_as::<_, PostRow>(&sql)
                .bind(slug.as_str())
                .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn list(&self, filter: &PostFilter, page: &Pagination) -> PostResult<(Vec<Post>, i64)> {
        const WHERE: &str = r#"
            WHERE ($1::BOOLEAN IS NULL OR published = $1)
              AND ($2::UUID IS NULL OR user_id = $2)
        "#;

        let published = filter.published;
        let user_id = filter.user_id.map(UserId::into_uuid);

        let count_sql = format!("SELECT COUNT(*) FROM posts {WHERE}");
        let total: i64 = timed(
            sqlx::query_scalar(&count_sql)
                .bind(published)
                .bind(user_id)
                .fetch_one(&self.pool),
        )
        .await?;

        let page_sql =
            format!("{SELECT_POST} {WHERE} ORDER BY created_at DESC, post_id DESC LIMIT $3 OFFSET $4");
        let rows = timed(
            sqlx::query_as::<_, PostRow>(&page_sql)
                .bind(published)
                .bind(user_id)
                .bind(page.limit())
                .bind(page.offset())
                .fetch_all(&self.pool),
        )
        .await?;

        Ok((rows.into_iter().map(PostRow::into_post).collect(), total))
    }

    async fn update(&self, post: &Post) -> PostResult<bool> {
        let result = timed(
            sqlx::query(
                r#"
                UPDATE posts SET
                    title = $2,
                    slug = $3,
                    content = $4,
                    excerpt = $5,
                    cover_image = $6,
                    published = $7,
                    published_at = $8,
                    updated_at = $9
                WHERE post_id = $1
                "#,
            )
            .bind(post.post_id.as_uuid())
            .bind(post.title.as_str())
            .bind(post.slug.as_str())
            .bind(&post.content)
            .bind(&post.excerpt)
            .bind(&post.cover_image)
            .bind(post.published)
            .bind(post.published_at)
            .bind(post.updated_at)
            .execute(&self.pool),
        )
        .await
        .map_err(slug_conflict)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        let result = timed(
            sqlx::query("DELETE FROM posts WHERE post_id = $1")
                .bind(post_id.as_uuid())
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Engagement Repository Implementation
// ============================================================================

impl EngagementRepository for PgPostRepository {
    async fn record_view(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool> {
        let result = timed(
            sqlx::query(
                r#"
                WITH inserted AS (
                    INSERT INTO post_views (post_id, visitor)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    RETURNING post_id
                )
                UPDATE posts SET views = views + 1
                WHERE post_id IN (SELECT post_id FROM inserted)
                "#,
            )
            .bind(post_id.as_uuid())
            .bind(visitor.key())
            .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_like(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool> {
        let result = timed(
            sqlx::query(
                r#"
                WITH inserted AS (
                    INSERT INTO post_likes (post_id, visitor)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                    RETURNING post_id
                )
                UPDATE posts SET likes = likes + 1
                WHERE post_id IN (SELECT post_id FROM inserted)
                "#,
            )
            .bind(post_id.as_uuid())
            .bind(visitor.key())
            .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_like(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool> {
        let result = timed(
            sqlx::query(
                r#"
                WITH removed AS (
                    DELETE FROM post_likes
                    WHERE post_id = $1 AND visitor = $2
                    RETURNING post_id
                )
                UPDATE posts SET likes = GREATEST(likes - 1, 0)
                WHERE post_id IN (SELECT post_id FROM removed)
                "#,
            )
            .bind(post_id.as_uuid())
            .bind(visitor.key())
            .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_share(&self, post_id: &PostId) -> PostResult<()> {
        timed(
            sqlx::query("UPDATE posts SET shares = shares + 1 WHERE post_id = $1")
                .bind(post_id.as_uuid())
                .execute(&self.pool),
        )
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    cover_image: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    user_id: Uuid,
    views: i64,
    likes: i64,
    shares: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            title: PostTitle::from_db(self.title),
            slug: Slug::from_db(self.slug),
            content: self.content,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            published: self.published,
            published_at: self.published_at,
            user_id: UserId::from_uuid(self.user_id),
            stats: PostStats {
                views: self.views,
                likes: self.likes,
                shares: self.shares,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
