//! Verify Domain Use Case
//!
//! One-shot DNS ownership check: look up TXT records at
//! `<label>.<domain>` and accept when any value equals the stored token.
//! Nothing is retried; the caller re-invokes after fixing DNS.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{DomainId, UserId};

use crate::application::config::DomainConfig;
use crate::domain::entity::custom_domain::CustomDomain;
use crate::domain::repository::DomainRepository;
use crate::domain::resolver::TxtResolver;
use crate::error::{DomainError, DomainResult, VerificationFailure};

/// Verify domain use case
pub struct VerifyDomainUseCase<R, D>
where
    R: DomainRepository,
    D: TxtResolver,
{
    repo: Arc<R>,
    resolver: Arc<D>,
    config: Arc<DomainConfig>,
}

impl<R, D> VerifyDomainUseCase<R, D>
where
    R: DomainRepository,
    D: TxtResolver,
{
    pub fn new(repo: Arc<R>, resolver: Arc<D>, config: Arc<DomainConfig>) -> Self {
        Self {
            repo,
            resolver,
            config,
        }
    }

    pub async fn execute(&self, domain_id: &DomainId, caller: &UserId) -> DomainResult<CustomDomain> {
        let mut domain = self
            .repo
            .find_by_id(domain_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        if !domain.is_owned_by(caller) {
            return Err(DomainError::AccessDenied);
        }

        if domain.verified {
            return Ok(domain);
        }

        let name = domain.challenge_name(&self.config.verification_label);

        let records = match self.resolver.lookup_txt(&name).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(domain = %domain.domain, error = %e, "Domain verification lookup failed");
                return Err(DomainError::VerificationFailed(
                    VerificationFailure::LookupFailed,
                ));
            }
        };

        if !records.iter().any(|r| domain.verify_token.matches(r)) {
            tracing::warn!(
                domain = %domain.domain,
                records = records.len(),
                "Verification token not published"
            );
            return Err(DomainError::VerificationFailed(
                VerificationFailure::TokenMissing,
            ));
        }

        let now = Utc::now();
        if !self.repo.mark_verified(domain_id, now).await? {
            return Err(DomainError::NotFound);
        }
        domain.mark_verified(now);

        tracing::info!(
            domain_id = %domain.domain_id,
            domain = %domain.domain,
            user_id = %caller,
            "Domain verified"
        );

        Ok(domain)
    }
}
