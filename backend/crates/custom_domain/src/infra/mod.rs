//! Infrastructure Layer
//!
//! Database and DNS implementations.

pub mod dns;
pub mod postgres;

pub use dns::HickoryTxtResolver;
pub use postgres::PgDomainRepository;
