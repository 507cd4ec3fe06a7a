//! Display Name Value Object
//!
//! 表示名は投稿の著者名として公開される。ログインには使わないので
//! 一意性は不要。
//!
//! ## 不変条件
//! - NFKC 正規化・前後の空白除去後に 2〜64 文字
//! - 制御文字を含まない

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use kernel::error::app_error::{AppError, AppResult};

/// Minimum display name length (in characters)
pub const DISPLAY_NAME_MIN_LENGTH: usize = 2;

/// Maximum display name length (in characters)
pub const DISPLAY_NAME_MAX_LENGTH: usize = 64;

/// Display name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        let len = trimmed.chars().count();
        if !(DISPLAY_NAME_MIN_LENGTH..=DISPLAY_NAME_MAX_LENGTH).contains(&len) {
            return Err(AppError::bad_request(format!(
                "Name must be between {} and {} characters",
                DISPLAY_NAME_MIN_LENGTH, DISPLAY_NAME_MAX_LENGTH
            )));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
