//! Login Use Case
//!
//! Exchanges email + password for a bearer token. Unknown email and wrong
//! password fail identically, and both run one Argon2 verification.

use std::sync::Arc;

use crate::application::register::AuthOutput;
use crate::application::token::TokenCodec;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenCodec>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenCodec>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        let raw_password = RawPassword::presented(input.password);

        let user = match Email::new(input.email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            UserPassword::verify_unknown(&raw_password);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput { token, user })
    }
}
