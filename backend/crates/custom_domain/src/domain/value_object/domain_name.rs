//! Domain Name Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Longest name DNS allows, without the trailing dot
pub const DOMAIN_NAME_MAX_LENGTH: usize = 253;

/// Longest single label
pub const LABEL_MAX_LENGTH: usize = 63;

/// A normalized (trimmed, lower-cased, no trailing dot) host name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainName(String);

impl DomainName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let lowered = raw.as_ref().trim().to_ascii_lowercase();
        let name = lowered.strip_suffix('.').unwrap_or(&lowered);

        if name.is_empty() {
            return Err(AppError::bad_request("Domain is required"));
        }

        if name.len() > DOMAIN_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Domain must be at most {} characters",
                DOMAIN_NAME_MAX_LENGTH
            )));
        }

        let labels: Vec<&str> = name.split('.').collect();
        if labels.len() < 2 || !labels.iter().all(|label| is_valid_label(label)) {
            return Err(AppError::bad_request("Invalid domain name")
                .with_action("Use a name like blog.example.com"));
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= LABEL_MAX_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let name = DomainName::new("  Blog.Example.COM. ").unwrap();
        assert_eq!(name.as_str(), "blog.example.com");
    }

    #[test]
    fn test_rejects_empty_and_single_label() {
        assert_eq!(DomainName::new("   ").unwrap_err().message(), "Domain is required");
        assert!(DomainName::new("localhost").is_err());
    }

    #[test]
    fn test_rejects_bad_labels() {
        assert!(DomainName::new("-blog.example.com").is_err());
        assert!(DomainName::new("blog-.example.com").is_err());
        assert!(DomainName::new("blog..example.com").is_err());
        assert!(DomainName::new("bl_og.example.com").is_err());
        assert!(DomainName::new("https://example.com").is_err());
        assert!(DomainName::new(format!("{}.com", "a".repeat(64))).is_err());
    }

    #[test]
    fn test_accepts_hyphens_and_digits() {
        assert!(DomainName::new("my-blog2.example.co.uk").is_ok());
        assert!(DomainName::new(format!("{}.com", "a".repeat(63))).is_ok());
    }

    #[test]
    fn test_total_length_limit() {
        let label = "a".repeat(60);
        let long = format!("{label}.{label}.{label}.{label}.com");
        assert!(long.len() > DOMAIN_NAME_MAX_LENGTH);
        assert!(DomainName::new(long).is_err());
    }
}
