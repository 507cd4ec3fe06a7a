//! Post Title Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Maximum title length (in characters)
pub const POST_TITLE_MAX_LENGTH: usize = 300;

/// Non-blank post title, stored as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(AppError::bad_request("Title is required"));
        }

        if title.chars().count() > POST_TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                POST_TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
