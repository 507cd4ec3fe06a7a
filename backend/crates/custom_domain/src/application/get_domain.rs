//! Get Domain Use Case

use std::sync::Arc;

use kernel::id::{DomainId, UserId};

use crate::domain::entity::custom_domain::CustomDomain;
use crate::domain::repository::DomainRepository;
use crate::error::{DomainError, DomainResult};

/// Fetches one domain; other owners' domains are `AccessDenied`
pub struct GetDomainUseCase<R>
where
    R: DomainRepository,
{
    repo: Arc<R>,
}

impl<R> GetDomainUseCase<R>
where
    R: DomainRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, domain_id: &DomainId, caller: &UserId) -> DomainResult<CustomDomain> {
        let domain = self
            .repo
            .find_by_id(domain_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        if !domain.is_owned_by(caller) {
            return Err(DomainError::AccessDenied);
        }

        Ok(domain)
    }
}
