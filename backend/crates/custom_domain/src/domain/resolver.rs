//! DNS Resolver Trait

use thiserror::Error;

/// The lookup itself failed (no such name, timeout, upstream failure)
#[derive(Debug, Clone, Error)]
#[error("TXT lookup for {name} failed: {reason}")]
pub struct LookupError {
    pub name: String,
    pub reason: String,
}

/// Answers TXT queries
#[trait_variant::make(TxtResolver: Send)]
pub trait LocalTxtResolver {
    /// TXT values published at `name`; each record's strings are concatenated
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;
}
