//! Use case and router tests for the content crate
//! Both repositories are replaced by in-memory implementations.

#[cfg(test)]
pub(crate) mod support {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use auth::domain::value_object::{
        display_name::DisplayName,
        email::Email,
        user_password::{RawPassword, UserPassword},
    };
    use auth::domain::{User, UserRepository};
    use auth::{AuthConfig, AuthResult, TokenCodec};
    use kernel::id::{PostId, UserId};

    use crate::domain::entity::post::{Post, PostStats};
    use crate::domain::repository::{EngagementRepository, PostFilter, PostRepository};
    use crate::domain::value_object::{pagination::Pagination, slug::Slug, visitor::Visitor};
    use crate::error::{PostError, PostResult};

    #[derive(Clone, Default)]
    pub struct InMemoryPostRepository {
        posts: Arc<Mutex<Vec<Post>>>,
        views: Arc<Mutex<HashSet<String>>>,
        likes: Arc<Mutex<HashSet<String>>>,
    }

    impl InMemoryPostRepository {
        pub fn len(&self) -> usize {
            self.posts.lock().unwrap().len()
        }

        pub fn stats(&self, slug: &str) -> PostStats {
            let posts = self.posts.lock().unwrap();
            posts
                .iter()
                .find(|p| p.slug.as_str() == slug)
                .map(|p| p.stats)
                .unwrap()
        }

        fn bump(&self, post_id: &PostId, apply: impl FnOnce(&mut PostStats)) {
            let mut posts = self.posts.lock().unwrap();
            if let Some(post) = posts.iter_mut().find(|p| &p.post_id == post_id) {
                apply(&mut post.stats);
            }
        }
    }

    fn row_key(post_id: &PostId, visitor: &Visitor) -> String {
        format!("{post_id}/{}", visitor.key())
    }

    impl PostRepository for InMemoryPostRepository {
        async fn insert(&self, post: &Post) -> PostResult<()> {
            let mut posts = self.posts.lock().unwrap();
            if posts.iter().any(|p| p.slug == post.slug) {
                return Err(PostError::SlugTaken);
            }
            posts.push(post.clone());
            Ok(())
        }

        async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
            let posts = self.posts.lock().unwrap();
            Ok(posts.iter().find(|p| &p.post_id == post_id).cloned())
        }

        async fn find_by_slug(&self, slug: &Slug) -> PostResult<Option<Post>> {
            let posts = self.posts.lock().unwrap();
            Ok(posts.iter().find(|p| &p.slug == slug).cloned())
        }

        async fn list(
            &self,
            filter: &PostFilter,
            page: &Pagination,
        ) -> PostResult<(Vec<Post>, i64)> {
            let posts = self.posts.lock().unwrap();
            let mut matching: Vec<Post> = posts
                .iter()
                .filter(|p| filter.published.is_none_or(|want| p.published == want))
                .filter(|p| filter.user_id.is_none_or(|owner| p.user_id == owner))
                .cloned()
                .collect();
            // Insertion order stands in for created_at; newest first
            matching.reverse();

            let total = matching.len() as i64;
            let items = matching
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .collect();
            Ok((items, total))
        }

        async fn update(&self, post: &Post) -> PostResult<bool> {
            let mut posts = self.posts.lock().unwrap();
            if posts
                .iter()
                .any(|p| p.slug == post.slug && p.post_id != post.post_id)
            {
                return Err(PostError::SlugTaken);
            }
            match posts.iter_mut().find(|p| p.post_id == post.post_id) {
                Some(stored) => {
                    // Counters belong to the engagement side
                    let stats = stored.stats;
                    *stored = post.clone();
                    stored.stats = stats;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
            let mut posts = self.posts.lock().unwrap();
            let before = posts.len();
            posts.retain(|p| &p.post_id != post_id);
            Ok(posts.len() != before)
        }
    }

    impl EngagementRepository for InMemoryPostRepository {
        async fn record_view(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool> {
            let fresh = self.views.lock().unwrap().insert(row_key(post_id, visitor));
            if fresh {
                self.bump(post_id, |stats| stats.views += 1);
            }
            Ok(fresh)
        }

        async fn add_like(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool> {
            let fresh = self.likes.lock().unwrap().insert(row_key(post_id, visitor));
            if fresh {
                self.bump(post_id, |stats| stats.likes += 1);
            }
            Ok(fresh)
        }

        async fn remove_like(&self, post_id: &PostId, visitor: &Visitor) -> PostResult<bool> {
            let removed = self.likes.lock().unwrap().remove(&row_key(post_id, visitor));
            if removed {
                self.bump(post_id, |stats| stats.likes = (stats.likes - 1).max(0));
            }
            Ok(removed)
        }

        async fn record_share(&self, post_id: &PostId) -> PostResult<()> {
            self.bump(post_id, |stats| stats.shares += 1);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct InMemoryUserRepository {
        users: Arc<Mutex<Vec<User>>>,
    }

    impl UserRepository for InMemoryUserRepository {
        async fn create(&self, user: &User) -> AuthResult<()> {
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| &u.user_id == user_id).cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| &u.email == email).cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|u| &u.email == email))
        }

        async fn delete(&self, user_id: &UserId) -> AuthResult<bool> {
            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| &u.user_id != user_id);
            Ok(users.len() != before)
        }
    }

    pub fn tokens() -> Arc<TokenCodec> {
        Arc::new(TokenCodec::new(&AuthConfig::new("test-secret", 24)))
    }

    pub async fn seed_user(repo: &InMemoryUserRepository) -> User {
        let password = RawPassword::presented("correct horse".to_string());
        let user = User::new(
            Email::new("ada@example.com").unwrap(),
            DisplayName::new("Ada").unwrap(),
            UserPassword::from_raw(&password).unwrap(),
        );
        repo.create(&user).await.unwrap();
        user
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::support::{InMemoryPostRepository, InMemoryUserRepository, seed_user};
    use crate::application::*;
    use crate::domain::repository::PostFilter;
    use crate::domain::value_object::{pagination::Pagination, visitor::Visitor};
    use crate::error::PostError;
    use kernel::error::kind::ErrorKind;
    use kernel::id::{PostId, UserId};
    use std::sync::Arc;

    struct Fixture {
        posts: Arc<InMemoryPostRepository>,
        users: Arc<InMemoryUserRepository>,
        config: Arc<ContentConfig>,
        owner: UserId,
    }

    impl Fixture {
        async fn new() -> Self {
            let users = Arc::new(InMemoryUserRepository::default());
            let owner = seed_user(&users).await.user_id;
            Self {
                posts: Arc::new(InMemoryPostRepository::default()),
                users,
                config: Arc::new(ContentConfig::default()),
                owner,
            }
        }

        async fn create(&self, title: &str, published: bool) -> PostView {
            CreatePostUseCase::new(self.posts.clone(), self.users.clone(), self.config.clone())
                .execute(
                    self.owner,
                    CreatePostInput {
                        title: title.to_string(),
                        content: "body".to_string(),
                        excerpt: String::new(),
                        cover_image: String::new(),
                        published,
                    },
                )
                .await
                .unwrap()
        }

        fn update(&self) -> UpdatePostUseCase<InMemoryPostRepository, InMemoryUserRepository> {
            UpdatePostUseCase::new(self.posts.clone(), self.users.clone(), self.config.clone())
        }
    }

    #[tokio::test]
    async fn test_same_title_gets_suffixed_slugs() {
        let fx = Fixture::new().await;

        let first = fx.create("Hello World", false).await;
        let second = fx.create("Hello World", false).await;
        let third = fx.create("hello world!", false).await;

        assert_eq!(first.post.slug.as_str(), "hello-world");
        assert_eq!(second.post.slug.as_str(), "hello-world-1");
        assert_eq!(third.post.slug.as_str(), "hello-world-2");
    }

    #[tokio::test]
    async fn test_create_attaches_author() {
        let fx = Fixture::new().await;
        let view = fx.create("Hello", false).await;

        let author = view.author.unwrap();
        assert_eq!(author.user_id, fx.owner);
        assert_eq!(author.name.as_str(), "Ada");
    }

    #[tokio::test]
    async fn test_blank_title_is_bad_request() {
        let fx = Fixture::new().await;
        let err = CreatePostUseCase::new(fx.posts.clone(), fx.users.clone(), fx.config.clone())
            .execute(
                fx.owner,
                CreatePostInput {
                    title: "   ".to_string(),
                    content: String::new(),
                    excerpt: String::new(),
                    cover_image: String::new(),
                    published: false,
                },
            )
            .await
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(fx.posts.len(), 0);
    }

    #[tokio::test]
    async fn test_slug_attempts_are_bounded() {
        let mut fx = Fixture::new().await;
        fx.config = Arc::new(ContentConfig {
            max_slug_attempts: 2,
        });
        fx.create("Same", false).await;
        fx.create("Same", false).await;

        let err = CreatePostUseCase::new(fx.posts.clone(), fx.users.clone(), fx.config.clone())
            .execute(
                fx.owner,
                CreatePostInput {
                    title: "Same".to_string(),
                    content: String::new(),
                    excerpt: String::new(),
                    cover_image: String::new(),
                    published: false,
                },
            )
            .await
            .err()
            .unwrap();

        assert!(matches!(err, PostError::SlugExhausted(ref base) if base == "same"));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_publish_transitions() {
        let fx = Fixture::new().await;
        let draft = fx.create("Draft", false).await.post;
        assert!(draft.published_at.is_none());

        let published = fx
            .update()
            .execute(
                &draft.post_id,
                UpdatePostInput {
                    published: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .post;
        let stamp = published.published_at.unwrap();

        // Publishing again keeps the first stamp
        let again = fx
            .update()
            .execute(
                &draft.post_id,
                UpdatePostInput {
                    published: Some(true),
                    content: Some("edited".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .post;
        assert_eq!(again.published_at, Some(stamp));

        let unpublished = fx
            .update()
            .execute(
                &draft.post_id,
                UpdatePostInput {
                    published: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .post;
        assert!(!unpublished.published);
        assert!(unpublished.published_at.is_none());
    }

    #[tokio::test]
    async fn test_title_change_rederives_slug() {
        let fx = Fixture::new().await;
        fx.create("Taken", false).await;
        let post = fx.create("Original", false).await.post;

        let updated = fx
            .update()
            .execute(
                &post.post_id,
                UpdatePostInput {
                    title: Some("Taken".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .post;
        assert_eq!(updated.slug.as_str(), "taken-1");

        // The post's own slug counts as free on a re-save
        let unchanged = fx
            .update()
            .execute(
                &post.post_id,
                UpdatePostInput {
                    title: Some("Taken".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .post;
        assert_eq!(unchanged.slug, updated.slug);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_post_not_found() {
        let fx = Fixture::new().await;
        let missing = PostId::new();

        let err = fx
            .update()
            .execute(&missing, UpdatePostInput::default())
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = DeletePostUseCase::new(fx.posts.clone())
            .execute(&missing)
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_list_paginates_published_only() {
        let fx = Fixture::new().await;
        for i in 0..25 {
            fx.create(&format!("Post {i}"), true).await;
        }
        fx.create("Hidden draft", false).await;

        let list = ListPostsUseCase::new(fx.posts.clone(), fx.users.clone());
        let filter = PostFilter {
            published: Some(true),
            user_id: None,
        };

        let first = list
            .execute(filter, Pagination::new(Some(1), Some(10)))
            .await
            .unwrap();
        assert_eq!(first.total, 25);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.posts.len(), 10);
        assert_eq!(first.posts[0].post.title.as_str(), "Post 24");

        let last = list
            .execute(filter, Pagination::new(Some(3), Some(10)))
            .await
            .unwrap();
        assert_eq!(last.posts.len(), 5);
        assert!(last.posts.iter().all(|v| v.post.published));
    }

    #[tokio::test]
    async fn test_get_by_slug_includes_drafts() {
        let fx = Fixture::new().await;
        fx.create("Work In Progress", false).await;

        let view = GetPostUseCase::new(fx.posts.clone(), fx.users.clone())
            .by_slug("work-in-progress")
            .await
            .unwrap();
        assert!(!view.post.published);

        let err = GetPostUseCase::new(fx.posts.clone(), fx.users.clone())
            .by_slug("nope")
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_views_count_once_per_visitor() {
        let fx = Fixture::new().await;
        fx.create("Read Me", true).await;
        let engagement = EngagementUseCase::new(fx.posts.clone());
        let reader = Visitor::Anonymous("f1".to_string());

        assert_eq!(engagement.view("read-me", &reader).await.unwrap(), Recorded::New);
        assert_eq!(engagement.view("read-me", &reader).await.unwrap(), Recorded::Repeat);
        assert_eq!(
            engagement
                .view("read-me", &Visitor::Anonymous("f2".to_string()))
                .await
                .unwrap(),
            Recorded::New
        );

        assert_eq!(fx.posts.stats("read-me").views, 2);
    }

    #[tokio::test]
    async fn test_like_and_unlike_are_idempotent() {
        let fx = Fixture::new().await;
        fx.create("Liked", true).await;
        let engagement = EngagementUseCase::new(fx.posts.clone());
        let member = Visitor::Member(fx.owner);

        let outcomes = [
            (LikeAction::Like, Recorded::New, 1),
            (LikeAction::Like, Recorded::Repeat, 1),
            (LikeAction::Unlike, Recorded::New, 0),
            (LikeAction::Unlike, Recorded::Repeat, 0),
        ];
        for (action, expected, likes) in outcomes {
            let recorded = engagement.like("liked", &member, action).await.unwrap();
            assert_eq!(recorded, expected, "{action:?}");
            assert_eq!(fx.posts.stats("liked").likes, likes);
        }
    }

    #[tokio::test]
    async fn test_member_and_anonymous_likes_are_separate() {
        let fx = Fixture::new().await;
        fx.create("Popular", true).await;
        let engagement = EngagementUseCase::new(fx.posts.clone());

        engagement
            .like("popular", &Visitor::Member(fx.owner), LikeAction::Like)
            .await
            .unwrap();
        engagement
            .like("popular", &Visitor::Anonymous("f1".to_string()), LikeAction::Like)
            .await
            .unwrap();

        assert_eq!(fx.posts.stats("popular").likes, 2);
    }

    #[tokio::test]
    async fn test_shares_always_count() {
        let fx = Fixture::new().await;
        fx.create("Shared", true).await;
        let engagement = EngagementUseCase::new(fx.posts.clone());

        engagement.share("shared").await.unwrap();
        engagement.share("shared").await.unwrap();

        assert_eq!(fx.posts.stats("shared").shares, 2);
    }

    #[tokio::test]
    async fn test_engagement_on_unknown_slug_not_found() {
        let fx = Fixture::new().await;
        let engagement = EngagementUseCase::new(fx.posts.clone());
        let reader = Visitor::Anonymous("f1".to_string());

        let err = engagement.view("ghost", &reader).await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = engagement.like("ghost", &reader, LikeAction::Like).await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = engagement.share("ghost").await.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_edit_keeps_counters() {
        let fx = Fixture::new().await;
        let post = fx.create("Counted", true).await.post;
        EngagementUseCase::new(fx.posts.clone())
            .view("counted", &Visitor::Anonymous("f1".to_string()))
            .await
            .unwrap();

        let edited = fx
            .update()
            .execute(
                &post.post_id,
                UpdatePostInput {
                    content: Some("edited".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .post;

        assert_eq!(edited.stats.views, 1);
    }

    #[tokio::test]
    async fn test_missing_owner_is_not_an_error() {
        let fx = Fixture::new().await;
        let orphan = CreatePostUseCase::new(
            fx.posts.clone(),
            Arc::new(InMemoryUserRepository::default()),
            fx.config.clone(),
        )
        .execute(
            UserId::new(),
            CreatePostInput {
                title: "Orphan".to_string(),
                content: String::new(),
                excerpt: String::new(),
                cover_image: String::new(),
                published: true,
            },
        )
        .await
        .unwrap();

        assert!(orphan.author.is_none());
    }
}

#[cfg(test)]
mod router_tests {
    use super::support::{InMemoryPostRepository, InMemoryUserRepository, seed_user, tokens};
    use crate::application::config::ContentConfig;
    use crate::presentation::router::{admin_posts_router_generic, posts_router_generic};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::{Router, response::Response};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct Apps {
        public: Router,
        admin: Router,
        bearer: String,
        posts: InMemoryPostRepository,
    }

    async fn apps() -> Apps {
        let posts = InMemoryPostRepository::default();
        let users = InMemoryUserRepository::default();
        let tokens = tokens();
        let user = seed_user(&users).await;
        let bearer = format!("Bearer {}", tokens.issue(&user).unwrap().token);

        Apps {
            public: posts_router_generic(
                posts.clone(),
                users.clone(),
                tokens.clone(),
                ContentConfig::default(),
            ),
            admin: admin_posts_router_generic(
                posts.clone(),
                users,
                tokens,
                ContentConfig::default(),
            ),
            bearer,
            posts,
        }
    }

    fn authed(method: &str, uri: &str, bearer: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, bearer);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    /// Public POST from a reader at `ip` using browser `ua`
    fn reader(
        uri: &str,
        ip: &str,
        ua: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("x-forwarded-for", ip)
            .header(header::USER_AGENT, ua);
        if let Some(bearer) = bearer {
            builder = builder.header(header::AUTHORIZATION, bearer);
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(apps: &Apps, body: Value) -> Value {
        let response = apps
            .admin
            .clone()
            .oneshot(authed("POST", "/", &apps.bearer, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await
    }

    #[tokio::test]
    async fn test_create_returns_camel_case_post_with_user() {
        let apps = apps().await;
        let body = create(
            &apps,
            json!({ "title": "Hello World", "content": "Hi", "coverImage": "/uploads/a.png", "published": true }),
        )
        .await;

        let post = &body["post"];
        assert_eq!(post["slug"], "hello-world");
        assert_eq!(post["coverImage"], "/uploads/a.png");
        assert_eq!(post["published"], true);
        assert!(post["publishedAt"].is_string());
        assert!(post["userId"].is_string());
        assert_eq!(post["user"]["name"], "Ada");
        assert!(post["user"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn test_admin_routes_require_bearer() {
        let apps = apps().await;

        let response = apps.admin.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = apps
            .admin
            .oneshot(authed("GET", "/", "Bearer forged", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_public_list_hides_drafts() {
        let apps = apps().await;
        create(&apps, json!({ "title": "Live", "published": true })).await;
        create(&apps, json!({ "title": "Draft" })).await;

        let response = apps.public.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["page"], 1);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["posts"][0]["slug"], "live");

        let response = apps
            .admin
            .oneshot(authed("GET", "/?published=false", &apps.bearer, None))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["posts"][0]["slug"], "draft");
    }

    #[tokio::test]
    async fn test_invalid_paging_falls_back_to_defaults() {
        let apps = apps().await;
        create(&apps, json!({ "title": "Only", "published": true })).await;

        let response = apps
            .public
            .oneshot(get("/?page=abc&limit=-3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["total"], 1);
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let apps = apps().await;
        create(&apps, json!({ "title": "Hello World" })).await;

        let response = apps.public.clone().oneshot(get("/hello-world")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["post"]["title"], "Hello World");

        let response = apps.public.oneshot(get("/missing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "Post not found");
    }

    #[tokio::test]
    async fn test_malformed_ids_are_bad_request() {
        let apps = apps().await;

        let response = apps
            .admin
            .clone()
            .oneshot(authed("GET", "/not-a-uuid", &apps.bearer, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Invalid post ID");

        let response = apps
            .admin
            .oneshot(authed("GET", "/?userId=nope", &apps.bearer, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_then_delete() {
        let apps = apps().await;
        let created = create(&apps, json!({ "title": "First" })).await;
        let id = created["post"]["id"].as_str().unwrap().to_string();

        let response = apps
            .admin
            .clone()
            .oneshot(authed(
                "PUT",
                &format!("/{id}"),
                &apps.bearer,
                Some(json!({ "title": "Renamed", "published": true })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["post"]["slug"], "renamed");
        assert!(body["post"]["publishedAt"].is_string());

        let response = apps
            .admin
            .clone()
            .oneshot(authed("DELETE", &format!("/{id}"), &apps.bearer, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Post deleted successfully");

        let response = apps
            .admin
            .oneshot(authed("DELETE", &format!("/{id}"), &apps.bearer, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_title_is_bad_request() {
        let apps = apps().await;
        let response = apps
            .admin
            .oneshot(authed("POST", "/", &apps.bearer, Some(json!({ "content": "x" }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Title is required");
    }

    #[tokio::test]
    async fn test_view_counted_once_per_fingerprint() {
        let apps = apps().await;
        create(&apps, json!({ "title": "Hello", "published": true })).await;

        let response = apps
            .public
            .clone()
            .oneshot(reader("/hello/view", "203.0.113.7", "Firefox", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "success": true, "message": "View recorded" })
        );

        let response = apps
            .public
            .clone()
            .oneshot(reader("/hello/view", "203.0.113.7", "Firefox", None, None))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["message"], "Already viewed");

        apps.public
            .clone()
            .oneshot(reader("/hello/view", "203.0.113.7", "Safari", None, None))
            .await
            .unwrap();

        let response = apps.public.oneshot(get("/hello")).await.unwrap();
        let post = &json_body(response).await["post"];
        assert_eq!(post["views"], 2);
        assert_eq!(post["likes"], 0);
        assert_eq!(post["shares"], 0);
    }

    #[tokio::test]
    async fn test_member_like_follows_the_account() {
        let apps = apps().await;
        create(&apps, json!({ "title": "Hello", "published": true })).await;
        let like = || Some(json!({ "action": "like" }));
        let member = Some(apps.bearer.as_str());

        let response = apps
            .public
            .clone()
            .oneshot(reader("/hello/like", "203.0.113.7", "Firefox", member, like()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "success": true, "state": "liked" }));

        // Same account, another device
        let response = apps
            .public
            .clone()
            .oneshot(reader("/hello/like", "198.51.100.2", "Safari", member, like()))
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await,
            json!({ "success": true, "state": "liked", "message": "Already liked" })
        );

        // Anonymous reader on the first device, and a bad token falls back to it
        let response = apps
            .public
            .clone()
            .oneshot(reader("/hello/like", "203.0.113.7", "Firefox", None, like()))
            .await
            .unwrap();
        assert!(json_body(response).await.get("message").is_none());
        let response = apps
            .public
            .clone()
            .oneshot(reader("/hello/like", "203.0.113.7", "Firefox", Some("Bearer x"), like()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Already liked");

        assert_eq!(apps.posts.stats("hello").likes, 2);

        let response = apps
            .public
            .oneshot(reader(
                "/hello/like",
                "203.0.113.7",
                "Firefox",
                None,
                Some(json!({ "action": "unlike" })),
            ))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, json!({ "success": true, "state": "unliked" }));
        assert_eq!(apps.posts.stats("hello").likes, 1);
    }

    #[tokio::test]
    async fn test_like_requires_known_action() {
        let apps = apps().await;
        create(&apps, json!({ "title": "Hello", "published": true })).await;

        let response = apps
            .public
            .clone()
            .oneshot(reader("/hello/like", "203.0.113.7", "Firefox", None, Some(json!({}))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Missing action");

        let response = apps
            .public
            .oneshot(reader(
                "/hello/like",
                "203.0.113.7",
                "Firefox",
                None,
                Some(json!({ "action": "love" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Invalid action");
        assert_eq!(apps.posts.stats("hello").likes, 0);
    }

    #[tokio::test]
    async fn test_share_counts_and_unknown_slug_is_not_found() {
        let apps = apps().await;
        create(&apps, json!({ "title": "Hello", "published": true })).await;

        let response = apps
            .public
            .clone()
            .oneshot(reader("/hello/share", "203.0.113.7", "Firefox", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "success": true }));
        assert_eq!(apps.posts.stats("hello").shares, 1);

        for action in ["view", "share"] {
            let response = apps
                .public
                .clone()
                .oneshot(reader(&format!("/ghost/{action}"), "203.0.113.7", "Firefox", None, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{action}");
        }
    }
}
