//! HTTP Layer Assembly

use std::any::Any;
use std::sync::Arc;

use auth::{PgUserRepository, TokenCodec, auth_router};
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use content::{PgPostRepository, admin_posts_router, posts_router};
use custom_domain::{HickoryTxtResolver, PgDomainRepository, domains_router};
use kernel::error::app_error::AppError;
use media::{DiskStore, serve_uploads, upload_router};
use platform::database::Database;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer, ExposeHeaders};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Settings;

/// Everything the routers need, opened by `main`
pub struct Components {
    pub database: Database,
    pub resolver: HickoryTxtResolver,
    pub uploads: DiskStore,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    name: &'static str,
    database: &'static str,
}

/// GET /health
async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        name: "DyeInk API",
        database: "PostgreSQL",
    })
}

/// A panic in a handler becomes the standard JSON 500
fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Handler panicked");
    AppError::internal("Internal server error").into_response()
}

fn cors(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ]))
        .expose_headers(ExposeHeaders::list([header::CONTENT_LENGTH]))
        .allow_credentials(true)
}

fn security_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Build the full application router
pub fn build_router(settings: &Settings, components: Components) -> Router {
    let pool = components.database.pool().clone();
    let tokens = Arc::new(TokenCodec::new(&settings.auth));
    let upload_config = settings.upload_config();

    let users = PgUserRepository::new(pool.clone());
    let posts = PgPostRepository::new(pool.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_router(users.clone(), tokens.clone()))
        .nest(
            "/api/posts",
            posts_router(
                posts.clone(),
                users.clone(),
                tokens.clone(),
                settings.content_config(),
            ),
        )
        .nest(
            "/api/admin/posts",
            admin_posts_router(posts, users, tokens.clone(), settings.content_config()),
        )
        .nest(
            "/api/admin/domains",
            domains_router(
                PgDomainRepository::new(pool),
                components.resolver,
                tokens.clone(),
                settings.domain_config(),
            ),
        )
        .nest(
            "/api/admin/upload",
            upload_router(components.uploads, tokens, upload_config.clone()),
        )
        .nest_service("/uploads", serve_uploads(&upload_config))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(security_header(header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .layer(security_header(header::X_FRAME_OPTIONS, "DENY"))
        .layer(security_header(
            header::REFERRER_POLICY,
            "strict-origin-when-cross-origin",
        ))
        .layer(security_header(header::X_XSS_PROTECTION, "0"))
        .layer(cors(settings))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use platform::database::DatabaseConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn app(upload_dir: &std::path::Path) -> Router {
        let settings = Settings::from_lookup(|key| match key {
            "UPLOAD_DIR" => Some(upload_dir.display().to_string()),
            _ => None,
        });
        let database = DatabaseConfig {
            min_connections: 0,
            ..settings.database.clone()
        };
        let components = Components {
            database: Database::connect_lazy(&database).unwrap(),
            resolver: HickoryTxtResolver::new(),
            uploads: DiskStore::open(upload_dir).await.unwrap(),
        };
        build_router(&settings, components)
    }

    #[tokio::test]
    async fn test_health_with_security_headers() {
        let tmp = tempfile::tempdir().unwrap();
        let response = app(tmp.path())
            .await
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
        assert_eq!(headers["x-xss-protection"], "0");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["name"], "DyeInk API");
        assert_eq!(body["database"], "PostgreSQL");
    }

    #[tokio::test]
    async fn test_cors_preflight_for_allowed_origin() {
        let tmp = tempfile::tempdir().unwrap();
        let response = app(tmp.path())
            .await
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/admin/posts")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_admin_routes_reject_anonymous_before_touching_database() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app(tmp.path()).await;

        for uri in ["/api/admin/posts", "/api/admin/domains", "/api/auth/me"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_upload_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let response = app(tmp.path())
            .await
            .oneshot(
                Request::builder()
                    .uri("/uploads/missing.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_panic_renders_json_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
