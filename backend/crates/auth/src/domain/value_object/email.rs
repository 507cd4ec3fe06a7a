//! Email Value Object
//!
//! The login identifier. Stored trimmed and lower-cased, so lookups and
//! the `users_email_key` index compare normalized addresses.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// RFC 5321 path limit
const MAX_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Normalize and validate a submitted address
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized = raw.as_ref().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AppError::bad_request("Email is required"));
        }
        if normalized.len() > MAX_LEN || !well_formed(&normalized) {
            return Err(AppError::bad_request("Invalid email format")
                .with_action("Use an address like name@example.com"));
        }

        Ok(Self(normalized))
    }

    /// Rehydrate a stored address
    pub fn from_db(stored: impl Into<String>) -> Self {
        Self(stored.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `local@host.tld`: one `@`, no whitespace, a dotted ASCII host
fn well_formed(address: &str) -> bool {
    let Some((local, host)) = address.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local.len() <= MAX_LOCAL_LEN
        && !local.contains(|c: char| c == '@' || c.is_whitespace());

    let host_ok = host.contains('.')
        && host
            .split('.')
            .all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            });

    local_ok && host_ok
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
