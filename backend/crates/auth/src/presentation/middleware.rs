//! Bearer Authentication
//!
//! [`AuthUser`] extracts and verifies `Authorization: Bearer <token>`.
//! Use it as a handler argument to get the caller, or wrap a whole router
//! with [`require_bearer`] to reject anonymous requests before any body is
//! read.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::{FromExtractorLayer, from_extractor_with_state};
use kernel::id::UserId;

use crate::application::token::{Claims, TokenCodec};
use crate::error::AuthError;

/// The verified caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            name: claims.name,
            is_admin: claims.is_admin,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<TokenCodec>: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Already verified by the router-level gate
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::MissingToken)?;

        let tokens = Arc::<TokenCodec>::from_ref(state);
        let user = AuthUser::from(tokens.verify(token)?);

        parts.extensions.insert(user.clone());
        Ok(user)
    }
}

/// `Option<AuthUser>`: the caller when a valid token is present.
///
/// A missing or invalid token yields `None`, so public routes can tell
/// members from anonymous visitors without rejecting either.
impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<TokenCodec>: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await {
            Ok(user) => Ok(Some(user)),
            Err(AuthError::MissingToken) => Ok(None),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unusable bearer token");
                Ok(None)
            }
        }
    }
}

/// Token part of an `Authorization` value; the scheme is case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Layer that rejects requests without a valid bearer token
pub fn require_bearer(tokens: Arc<TokenCodec>) -> FromExtractorLayer<AuthUser, Arc<TokenCodec>> {
    from_extractor_with_state(tokens)
}
