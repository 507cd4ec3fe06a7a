//! Visitor Value Object
//!
//! Who is reading a post. Signed-in readers are keyed by account so their
//! likes follow them across devices; everyone else by a fingerprint of
//! address and browser.

use kernel::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visitor {
    Member(UserId),
    /// Hex fingerprint from `platform::client::visitor_fingerprint`
    Anonymous(String),
}

impl Visitor {
    /// Storage key; the prefix keeps the two namespaces apart.
    pub fn key(&self) -> String {
        match self {
            Self::Member(user_id) => format!("user:{user_id}"),
            Self::Anonymous(fingerprint) => format!("anon:{fingerprint}"),
        }
    }
}
