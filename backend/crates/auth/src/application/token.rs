//! Bearer Token Codec
//!
//! HS256 JWTs carrying the user's id, email, name and admin flag. Expiry is
//! checked with zero leeway.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// Token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// User id
    pub sub: UserId,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies bearer tokens
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token valid from now
    pub fn issue(&self, user: &User) -> AuthResult<IssuedToken> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as if signed at `issued_at`
    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = issued_at.timestamp();
        let exp = iat.saturating_add(self.ttl_secs);

        let claims = Claims {
            sub: user.user_id,
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
            is_admin: user.is_admin,
            iat,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))?;

        let expires_at = DateTime::from_timestamp(exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC);

        Ok(IssuedToken { token, expires_at })
    }

    /// Check signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Bearer token rejected");
                AuthError::InvalidToken
            })
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        display_name::DisplayName,
        email::Email,
        user_password::{RawPassword, UserPassword},
    };

    fn user() -> User {
        User {
            user_id: UserId::new(),
            email: Email::from_db("ada@example.com"),
            password_hash: UserPassword::from_raw(&RawPassword::presented("pw".into())).unwrap(),
            name: DisplayName::from_db("Ada"),
            is_admin: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::new(&AuthConfig::new("test-secret", 24));
        let user = user();
        let issued = codec.issue(&user).unwrap();

        let claims = codec.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, user.user_id);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.name, "Ada");
        assert!(claims.is_admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert_eq!(issued.expires_at.timestamp(), claims.exp);
    }

    #[test]
    fn test_claims_use_camel_case() {
        let codec = TokenCodec::new(&AuthConfig::new("test-secret", 1));
        let issued = codec.issue(&user()).unwrap();
        let raw = decode::<serde_json::Value>(&issued.token, &codec.decoding, &codec.validation)
            .unwrap()
            .claims;
        assert_eq!(raw["isAdmin"], true);
        assert!(raw.get("is_admin").is_none());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issued = TokenCodec::new(&AuthConfig::new("secret-a", 1))
            .issue(&user())
            .unwrap();
        let result = TokenCodec::new(&AuthConfig::new("secret-b", 1)).verify(&issued.token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let codec = TokenCodec::new(&AuthConfig::default());
        assert!(matches!(codec.verify(""), Err(AuthError::InvalidToken)));
        assert!(matches!(codec.verify("not.a.jwt"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_token_accepted_before_expiry_and_rejected_after() {
        let codec = TokenCodec::new(&AuthConfig::new("test-secret", 1));
        let user = user();

        let fresh = codec
            .issue_at(&user, Utc::now() - chrono::Duration::minutes(59))
            .unwrap();
        assert!(codec.verify(&fresh.token).is_ok());

        let stale = codec
            .issue_at(&user, Utc::now() - chrono::Duration::minutes(61))
            .unwrap();
        assert!(matches!(codec.verify(&stale.token), Err(AuthError::InvalidToken)));
    }
}
