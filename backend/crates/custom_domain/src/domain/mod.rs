//! Domain Layer
//!
//! Contains entities, value objects, repository and resolver traits.

pub mod entity;
pub mod repository;
pub mod resolver;
pub mod value_object;

// Re-exports
pub use entity::custom_domain::{CustomDomain, DnsInstructions};
pub use repository::DomainRepository;
pub use resolver::{LookupError, TxtResolver};
