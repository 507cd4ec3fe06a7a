//! API DTOs (Data Transfer Objects)

use auth::presentation::dto::UserResponse;
use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::{LikeAction, PostPage, PostView, Recorded};

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub published: bool,
}

/// Update post request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}

/// `?page&limit&published&userId`
///
/// Kept as strings: unparsable numbers fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub published: Option<String>,
    pub user_id: Option<String>,
}

impl ListPostsQuery {
    pub fn page(&self) -> Option<i64> {
        self.page.as_deref().and_then(|p| p.trim().parse().ok())
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|l| l.trim().parse().ok())
    }

    /// `"true"` filters to published posts, any other non-empty value to drafts
    pub fn published(&self) -> Option<bool> {
        self.published
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| p == "true")
    }
}

/// `{"action": "like" | "unlike"}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LikeRequest {
    pub action: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Post as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    pub views: i64,
    pub likes: i64,
    pub shares: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostView> for PostResponse {
    fn from(view: PostView) -> Self {
        let PostView { post, author } = view;
        Self {
            id: post.post_id,
            title: post.title.as_str().to_string(),
            slug: post.slug.as_str().to_string(),
            content: post.content,
            excerpt: post.excerpt,
            cover_image: post.cover_image,
            published: post.published,
            published_at: post.published_at,
            user_id: post.user_id,
            user: author.as_ref().map(UserResponse::from),
            views: post.stats.views,
            likes: post.stats.likes,
            shares: post.stats.shares,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// `{"post": …}`
#[derive(Debug, Clone, Serialize)]
pub struct PostEnvelope {
    pub post: PostResponse,
}

impl From<PostView> for PostEnvelope {
    fn from(view: PostView) -> Self {
        Self {
            post: PostResponse::from(view),
        }
    }
}

/// Paginated list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

impl From<PostPage> for PostListResponse {
    fn from(page: PostPage) -> Self {
        Self {
            posts: page.posts.into_iter().map(PostResponse::from).collect(),
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

/// `{"message": …}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Reply to a view, like or share
#[derive(Debug, Clone, Serialize)]
pub struct EngagementResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl EngagementResponse {
    pub fn view(recorded: Recorded) -> Self {
        let message = match recorded {
            Recorded::New => "View recorded",
            Recorded::Repeat => "Already viewed",
        };
        Self {
            success: true,
            state: None,
            message: Some(message),
        }
    }

    pub fn like(action: LikeAction, recorded: Recorded) -> Self {
        let (state, repeat) = match action {
            LikeAction::Like => ("liked", "Already liked"),
            LikeAction::Unlike => ("unliked", "Nothing to unlike"),
        };
        Self {
            success: true,
            state: Some(state),
            message: (recorded == Recorded::Repeat).then_some(repeat),
        }
    }

    pub fn shared() -> Self {
        Self {
            success: true,
            state: None,
            message: None,
        }
    }
}
