//! Delete Domain Use Case

use std::sync::Arc;

use kernel::id::{DomainId, UserId};

use crate::domain::repository::DomainRepository;
use crate::error::{DomainError, DomainResult};

/// Delete domain use case
///
/// Scoped to the owner: someone else's domain looks exactly like a missing
/// one.
pub struct DeleteDomainUseCase<R>
where
    R: DomainRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteDomainUseCase<R>
where
    R: DomainRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, domain_id: &DomainId, caller: &UserId) -> DomainResult<()> {
        if !self.repo.delete_owned(domain_id, caller).await? {
            return Err(DomainError::NotFound);
        }

        tracing::info!(domain_id = %domain_id, user_id = %caller, "Domain deleted");

        Ok(())
    }
}
