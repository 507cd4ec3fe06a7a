//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_domain;
pub mod get_domain;
pub mod list_domains;
pub mod register_domain;
pub mod verify_domain;

// Re-exports
pub use config::DomainConfig;
pub use delete_domain::DeleteDomainUseCase;
pub use get_domain::GetDomainUseCase;
pub use list_domains::ListDomainsUseCase;
pub use register_domain::RegisterDomainUseCase;
pub use verify_domain::VerifyDomainUseCase;
