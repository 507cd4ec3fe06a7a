//! List Domains Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::custom_domain::CustomDomain;
use crate::domain::repository::DomainRepository;
use crate::error::DomainResult;

/// Lists the caller's domains
pub struct ListDomainsUseCase<R>
where
    R: DomainRepository,
{
    repo: Arc<R>,
}

impl<R> ListDomainsUseCase<R>
where
    R: DomainRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: &UserId) -> DomainResult<Vec<CustomDomain>> {
        self.repo.list_by_user(owner).await
    }
}
