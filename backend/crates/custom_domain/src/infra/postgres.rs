//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::{DomainId, UserId};
use platform::database::bounded;
use sqlx::PgPool;
use std::future::Future;
use uuid::Uuid;

use crate::domain::entity::custom_domain::CustomDomain;
use crate::domain::repository::DomainRepository;
use crate::domain::value_object::{domain_name::DomainName, verify_token::VerifyToken};
use crate::error::{DomainError, DomainResult};

/// PostgreSQL-backed custom domain repository
#[derive(Clone)]
pub struct PgDomainRepository {
    pool: PgPool,
}

impl PgDomainRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn timed<T>(query: impl Future<Output = Result<T, sqlx::Error>>) -> DomainResult<T> {
    bounded(query).await
}

const SELECT_DOMAIN: &str = r#"
    SELECT
        domain_id,
        domain,
        verified,
        verify_token,
        user_id,
        created_at,
        updated_at
    FROM domains
"#;

impl DomainRepository for PgDomainRepository {
    async fn insert(&self, domain: &CustomDomain) -> DomainResult<()> {
        timed(
            sqlx::query(
                r#"
                INSERT INTO domains (
                    domain_id,
                    domain,
                    verified,
                    verify_token,
                    user_id,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(domain.domain_id.as_uuid())
            .bind(domain.domain.as_str())
            .bind(domain.verified)
            .bind(domain.verify_token.as_str())
            .bind(domain.user_id.as_uuid())
            .bind(domain.created_at)
            .bind(domain.updated_at)
            .execute(&self.pool),
        )
        .await
        .map_err(|e| match e {
            DomainError::Database(ref db) if is_unique_violation(db) => DomainError::DomainTaken,
            other => other,
        })?;

        Ok(())
    }

    async fn find_by_id(&self, domain_id: &DomainId) -> DomainResult<Option<CustomDomain>> {
        let sql = format!("{SELECT_DOMAIN} WHERE domain_id = $1");
        let row = timed(
            sqlx::query_as::<_, DomainRow>(&sql)
                .bind(domain_id.as_uuid())
                .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.map(DomainRow::into_domain))
    }

    async fn list_by_user(&self, user_id: &UserId) -> DomainResult<Vec<CustomDomain>> {
        let sql = format!("{SELECT_DOMAIN} WHERE user_id = $1 ORDER BY created_at, domain_id");
        let rows = timed(
            sqlx::query_as::<_, DomainRow>(&sql)
                .bind(user_id.as_uuid())
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.into_iter().map(DomainRow::into_domain).collect())
    }

    async fn delete_owned(&self, domain_id: &DomainId, user_id: &UserId) -> DomainResult<bool> {
        let result = timed(
            sqlx::query("DELETE FROM domains WHERE domain_id = $1 AND user_id = $2")
                .bind(domain_id.as_uuid())
                .bind(user_id.as_uuid())
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_verified(&self, domain_id: &DomainId, at: DateTime<Utc>) -> DomainResult<bool> {
        let result = timed(
            sqlx::query("UPDATE domains SET verified = TRUE, updated_at = $2 WHERE domain_id = $1")
                .bind(domain_id.as_uuid())
                .bind(at)
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
struct DomainRow {
    domain_id: Uuid,
    domain: String,
    verified: bool,
    verify_token: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DomainRow {
    fn into_domain(self) -> CustomDomain {
        CustomDomain {
            domain_id: DomainId::from_uuid(self.domain_id),
            domain: DomainName::from_db(self.domain),
            verified: self.verified,
            verify_token: VerifyToken::from_db(self.verify_token),
            user_id: UserId::from_uuid(self.user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
