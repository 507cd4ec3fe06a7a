//! Register Use Case
//!
//! Creates a new account and signs the caller in.

use std::sync::Arc;

use crate::application::token::{IssuedToken, TokenCodec};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Token plus the account it was issued for (register and login)
pub struct AuthOutput {
    pub token: IssuedToken,
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenCodec>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenCodec>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let email = Email::new(input.email)?;
        let name = DisplayName::new(&input.name)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password)?;
        let user = User::new(email, name, password_hash);

        // The unique index still rejects a registration that raced past the check.
        self.repo.create(&user).await?;

        let token = self.tokens.issue(&user)?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(AuthOutput { token, user })
    }
}
