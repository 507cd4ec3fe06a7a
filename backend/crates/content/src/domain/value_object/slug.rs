//! Slug Value Object
//!
//! URL-safe, lowercase, hyphenated key derived from a post title.
//!
//! ## Derivation
//! 1. Unicode NFKD, combining marks dropped (`é` → `e`)
//! 2. ASCII alphanumerics kept (lowercased), every other run becomes one `-`
//! 3. Leading/trailing `-` trimmed, cut to [`SLUG_MAX_LENGTH`]
//! 4. Empty result falls back to [`FALLBACK_SLUG`]
//!
//! Collisions are resolved by suffixing `-1`, `-2`, … (see [`Slug::candidates`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Maximum length of a base slug (before any numeric suffix)
pub const SLUG_MAX_LENGTH: usize = 96;

/// Slug used when the title has no usable characters
pub const FALLBACK_SLUG: &str = "post";

/// Slug value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive the base slug for a title
    pub fn from_title(title: &str) -> Self {
        let mut slug = String::with_capacity(title.len().min(SLUG_MAX_LENGTH));
        let mut pending_dash = false;

        for ch in title.nfkd() {
            if ch.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(ch.to_ascii_lowercase());
            } else if !is_combining_mark(ch) {
                pending_dash = true;
            }

            if slug.len() >= SLUG_MAX_LENGTH {
                break;
            }
        }

        // ASCII only, so byte truncation is safe
        slug.truncate(SLUG_MAX_LENGTH);
        let trimmed = slug.trim_end_matches('-');

        if trimmed.is_empty() {
            Self(FALLBACK_SLUG.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Create from database / path value (not re-derived)
    pub fn from_db(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// `base`, `base-1`, `base-2`, … in order of preference
    pub fn candidates(&self) -> impl Iterator<Item = Slug> + '_ {
        std::iter::once(self.clone())
            .chain((1u32..).map(move |n| Slug(format!("{}-{}", self.0, n))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
