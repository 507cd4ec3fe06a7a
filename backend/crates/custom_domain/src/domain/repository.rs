//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::{DomainId, UserId};

use crate::domain::entity::custom_domain::CustomDomain;
use crate::error::DomainResult;

/// Custom domain repository trait
#[trait_variant::make(DomainRepository: Send)]
pub trait LocalDomainRepository {
    /// Insert a new domain
    ///
    /// Fails with `DomainError::DomainTaken` when the name is registered.
    async fn insert(&self, domain: &CustomDomain) -> DomainResult<()>;

    /// Find domain by ID
    async fn find_by_id(&self, domain_id: &DomainId) -> DomainResult<Option<CustomDomain>>;

    /// Every domain owned by `user_id`, oldest first
    async fn list_by_user(&self, user_id: &UserId) -> DomainResult<Vec<CustomDomain>>;

    /// Delete when both id and owner match; returns `false` otherwise
    async fn delete_owned(&self, domain_id: &DomainId, user_id: &UserId) -> DomainResult<bool>;

    /// Set `verified = true`; returns `false` when the domain is gone
    async fn mark_verified(&self, domain_id: &DomainId, at: DateTime<Utc>) -> DomainResult<bool>;
}
