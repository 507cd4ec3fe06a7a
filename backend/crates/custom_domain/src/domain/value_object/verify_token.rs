//! Verification Token Value Object

use platform::crypto::random_token;

/// Bytes of entropy in a freshly generated token
pub const VERIFY_TOKEN_BYTES: usize = 32;

/// Opaque challenge the owner publishes as a TXT record.
///
/// Generated once on registration and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyToken(String);

impl VerifyToken {
    pub fn generate() -> Self {
        Self(random_token(VERIFY_TOKEN_BYTES))
    }

    pub fn from_db(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a TXT record value carries this token (surrounding whitespace ignored)
    pub fn matches(&self, record: &str) -> bool {
        record.trim() == self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_unique_and_dns_safe() {
        let a = VerifyToken::generate();
        let b = VerifyToken::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 43);
        assert!(
            a.as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_matches_trims_record() {
        let token = VerifyToken::from_db("abc123");
        assert!(token.matches("abc123"));
        assert!(token.matches("  abc123\n"));
        assert!(!token.matches("abc1234"));
        assert!(!token.matches("ABC123"));
    }
}
