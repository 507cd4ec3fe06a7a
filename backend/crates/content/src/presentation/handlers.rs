//! HTTP Handlers

use auth::domain::UserRepository;
use auth::{AuthUser, TokenCodec};
use axum::Json;
use axum::extract::{FromRef, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::ApiJson;
use kernel::id::{PostId, UserId};
use std::sync::Arc;

use crate::application::{
    ContentConfig, CreatePostInput, CreatePostUseCase, DeletePostUseCase, EngagementUseCase,
    GetPostUseCase, LikeAction, ListPostsUseCase, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::{EngagementRepository, PostFilter, PostRepository};
use crate::domain::value_object::{pagination::Pagination, visitor::Visitor};
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{
    CreatePostRequest, EngagementResponse, LikeRequest, ListPostsQuery, MessageResponse,
    PostEnvelope, PostListResponse, UpdatePostRequest,
};
use crate::presentation::fingerprint::Fingerprint;

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R, U>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub posts: Arc<R>,
    pub users: Arc<U>,
    pub tokens: Arc<TokenCodec>,
    pub config: Arc<ContentConfig>,
}

impl<R, U> FromRef<ContentAppState<R, U>> for Arc<TokenCodec>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &ContentAppState<R, U>) -> Self {
        state.tokens.clone()
    }
}

fn parse_post_id(raw: &str) -> PostResult<PostId> {
    raw.parse().map_err(|_| PostError::InvalidId)
}

// ============================================================================
// Public
// ============================================================================

/// GET /api/posts
pub async fn list_published<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Query(query): Query<ListPostsQuery>,
) -> PostResult<Json<PostListResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.posts.clone(), state.users.clone());

    let filter = PostFilter {
        published: Some(true),
        user_id: None,
    };
    let page = Pagination::new(query.page(), query.limit());

    let output = use_case.execute(filter, page).await?;

    Ok(Json(PostListResponse::from(output)))
}

/// GET /api/posts/{slug}
pub async fn get_by_slug<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Path(slug): Path<String>,
) -> PostResult<Json<PostEnvelope>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.posts.clone(), state.users.clone());
    let view = use_case.by_slug(&slug).await?;

    Ok(Json(PostEnvelope::from(view)))
}

/// POST /api/posts/{slug}/view
pub async fn record_view<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Path(slug): Path<String>,
    Fingerprint(fingerprint): Fingerprint,
) -> PostResult<Json<EngagementResponse>>
where
    R: PostRepository + EngagementRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let recorded = EngagementUseCase::new(state.posts.clone())
        .view(&slug, &Visitor::Anonymous(fingerprint))
        .await?;

    Ok(Json(EngagementResponse::view(recorded)))
}

/// POST /api/posts/{slug}/like
///
/// Signed-in readers like as themselves; a missing or bad token falls back
/// to the anonymous fingerprint.
pub async fn like<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Path(slug): Path<String>,
    caller: Option<AuthUser>,
    Fingerprint(fingerprint): Fingerprint,
    ApiJson(req): ApiJson<LikeRequest>,
) -> PostResult<Json<EngagementResponse>>
where
    R: PostRepository + EngagementRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let action = LikeAction::parse(req.action.as_deref())?;
    let visitor = match caller {
        Some(user) => Visitor::Member(user.user_id),
        None => Visitor::Anonymous(fingerprint),
    };

    let recorded = EngagementUseCase::new(state.posts.clone())
        .like(&slug, &visitor, action)
        .await?;

    Ok(Json(EngagementResponse::like(action, recorded)))
}

/// POST /api/posts/{slug}/share
pub async fn share<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Path(slug): Path<String>,
) -> PostResult<Json<EngagementResponse>>
where
    R: PostRepository + EngagementRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    EngagementUseCase::new(state.posts.clone())
        .share(&slug)
        .await?;

    Ok(Json(EngagementResponse::shared()))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/posts
pub async fn list_all<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Query(query): Query<ListPostsQuery>,
) -> PostResult<Json<PostListResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = match query.user_id.as_deref().filter(|id| !id.is_empty()) {
        Some(raw) => Some(raw.parse::<UserId>().map_err(|_| PostError::InvalidUserId)?),
        None => None,
    };

    let use_case = ListPostsUseCase::new(state.posts.clone(), state.users.clone());

    let filter = PostFilter {
        published: query.published(),
        user_id,
    };
    let page = Pagination::new(query.page(), query.limit());

    let output = use_case.execute(filter, page).await?;

    Ok(Json(PostListResponse::from(output)))
}

/// GET /api/admin/posts/{id}
pub async fn get_by_id<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Path(id): Path<String>,
) -> PostResult<Json<PostEnvelope>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    let use_case = GetPostUseCase::new(state.posts.clone(), state.users.clone());
    let view = use_case.by_id(&post_id).await?;

    Ok(Json(PostEnvelope::from(view)))
}

/// POST /api/admin/posts
pub async fn create<R, U>(
    State(state): State<ContentAppState<R, U>>,
    caller: AuthUser,
    ApiJson(req): ApiJson<CreatePostRequest>,
) -> PostResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(
        state.posts.clone(),
        state.users.clone(),
        state.config.clone(),
    );

    let input = CreatePostInput {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        cover_image: req.cover_image,
        published: req.published,
    };

    let view = use_case.execute(caller.user_id, input).await?;

    Ok((StatusCode::CREATED, Json(PostEnvelope::from(view))))
}

/// PUT /api/admin/posts/{id}
pub async fn update<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdatePostRequest>,
) -> PostResult<Json<PostEnvelope>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    let use_case = UpdatePostUseCase::new(
        state.posts.clone(),
        state.users.clone(),
        state.config.clone(),
    );

    let input = UpdatePostInput {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        cover_image: req.cover_image,
        published: req.published,
    };

    let view = use_case.execute(&post_id, input).await?;

    Ok(Json(PostEnvelope::from(view)))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete<R, U>(
    State(state): State<ContentAppState<R, U>>,
    Path(id): Path<String>,
) -> PostResult<Json<MessageResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    DeletePostUseCase::new(state.posts.clone())
        .execute(&post_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Post deleted successfully",
    }))
}
