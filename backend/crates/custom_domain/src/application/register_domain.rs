//! Register Domain Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::custom_domain::CustomDomain;
use crate::domain::repository::DomainRepository;
use crate::domain::value_object::domain_name::DomainName;
use crate::error::DomainResult;

/// Register domain use case
pub struct RegisterDomainUseCase<R>
where
    R: DomainRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterDomainUseCase<R>
where
    R: DomainRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate the name and store it unverified with a fresh token
    ///
    /// The unique index decides between concurrent registrations of the
    /// same name; the loser gets `DomainTaken`.
    pub async fn execute(&self, owner: UserId, name: &str) -> DomainResult<CustomDomain> {
        let name = DomainName::new(name)?;
        let domain = CustomDomain::new(owner, name);

        self.repo.insert(&domain).await?;

        tracing::info!(
            domain_id = %domain.domain_id,
            domain = %domain.domain,
            user_id = %owner,
            "Domain registered"
        );

        Ok(domain)
    }
}
