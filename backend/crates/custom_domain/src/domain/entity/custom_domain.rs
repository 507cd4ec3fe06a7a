//! Custom Domain Entity
//!
//! `verified` only ever moves from `false` to `true`; the token is fixed at
//! creation.

use chrono::{DateTime, Utc};
use kernel::id::{DomainId, UserId};

use crate::domain::value_object::{domain_name::DomainName, verify_token::VerifyToken};

/// A domain an owner wants to serve their blog from
#[derive(Debug, Clone, PartialEq)]
pub struct CustomDomain {
    pub domain_id: DomainId,
    /// Unique across owners
    pub domain: DomainName,
    pub verified: bool,
    pub verify_token: VerifyToken,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The TXT record the owner has to publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsInstructions {
    pub record_type: &'static str,
    pub name: String,
    pub value: String,
}

impl CustomDomain {
    /// Register an unverified domain with a fresh token
    pub fn new(owner: UserId, domain: DomainName) -> Self {
        let now = Utc::now();

        Self {
            domain_id: DomainId::new(),
            domain,
            verified: false,
            verify_token: VerifyToken::generate(),
            user_id: owner,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// `<label>.<domain>`, the name queried for TXT records
    pub fn challenge_name(&self, label: &str) -> String {
        format!("{}.{}", label, self.domain)
    }

    pub fn instructions(&self, label: &str) -> DnsInstructions {
        DnsInstructions {
            record_type: "TXT",
            name: self.challenge_name(label),
            value: self.verify_token.as_str().to_string(),
        }
    }

    pub fn mark_verified(&mut self, at: DateTime<Utc>) {
        self.verified = true;
        self.updated_at = at;
    }
}
