//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::UserId;
use platform::database::bounded;
use std::future::Future;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Run a query under the shared database deadline
async fn timed<T>(query: impl Future<Output = Result<T, sqlx::Error>>) -> AuthResult<T> {
    bounded(query).await
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let result = timed(
            sqlx::query(
                r#"
                INSERT INTO users (
                    user_id,
                    email,
                    password_hash,
                    name,
                    is_admin,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(user.user_id.as_uuid())
            .bind(user.email.as_str())
            .bind(user.password_hash.as_phc_string())
            .bind(user.name.as_str())
            .bind(user.is_admin)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool),
        )
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(AuthError::Database(e)) if is_unique_violation(&e) => Err(AuthError::EmailTaken),
            Err(e) => Err(e),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = timed(
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT
                    user_id,
                    email,
                    password_hash,
                    name,
                    is_admin,
                    created_at,
                    updated_at
                FROM users
                WHERE user_id = $1
                "#,
            )
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool),
        )
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = timed(
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT
                    user_id,
                    email,
                    password_hash,
                    name,
                    is_admin,
                    created_at,
                    updated_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email.as_str())
            .fetch_optional(&self.pool),
        )
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists: bool = timed(
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool),
        )
        .await?;

        Ok(exists)
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<bool> {
        // Domains cascade; posts keep their user_id and lose their author
        let result = timed(
            sqlx::query("DELETE FROM users WHERE user_id = $1")
                .bind(user_id.as_uuid())
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
    name: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = UserPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("user {}: {}", self.user_id, e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            password_hash,
            name: DisplayName::from_db(self.name),
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
