//! Custom Domain Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - CustomDomain entity, name/token value objects, repository and resolver traits
//! - `application/` - Use cases (register, list, get, delete, verify)
//! - `infra/` - PostgreSQL repository, hickory TXT resolver
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Verification Flow
//! 1. Registering a name stores it unverified with a random token
//! 2. The owner publishes the token as TXT at `_dyeink-verification.<domain>`
//! 3. Verify looks the record up once and flips `verified` when it matches

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::DomainConfig;
pub use error::{DomainError, DomainResult, VerificationFailure};
pub use infra::{dns::HickoryTxtResolver, postgres::PgDomainRepository};
pub use presentation::router::{domains_router, domains_router_generic};
