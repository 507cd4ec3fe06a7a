//! Post Entity
//!
//! Invariant: `published_at` is `Some` exactly when `published` is true.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_object::{post_title::PostTitle, slug::Slug};

/// Post entity
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub post_id: PostId,
    pub title: PostTitle,
    /// Unique across posts
    pub slug: Slug,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    /// Owning user
    pub user_id: UserId,
    /// Reader counters; written only by the engagement store
    pub stats: PostStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unique views, current likes and shares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostStats {
    pub views: i64,
    pub likes: i64,
    pub shares: i64,
}

/// Fields supplied on creation
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published: bool,
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<PostTitle>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}

impl Post {
    /// Create a new post; the slug is the title's base slug until assigned.
    pub fn new(owner: UserId, input: NewPost) -> Self {
        let now = Utc::now();

        let mut post = Self {
            post_id: PostId::new(),
            slug: Slug::from_title(input.title.as_str()),
            title: input.title,
            content: input.content,
            excerpt: input.excerpt,
            cover_image: input.cover_image,
            published: false,
            published_at: None,
            user_id: owner,
            stats: PostStats::default(),
            created_at: now,
            updated_at: now,
        };

        if input.published {
            post.publish(now);
        }

        post
    }

    pub fn publish(&mut self, at: DateTime<Utc>) {
        self.published = true;
        self.published_at = Some(at);
    }

    pub fn unpublish(&mut self) {
        self.published = false;
        self.published_at = None;
    }

    /// Apply a partial update.
    ///
    /// Publishing an unpublished post stamps `published_at`; publishing an
    /// already published post keeps the original stamp. Returns `true` when
    /// the title changed (the caller must re-assign the slug).
    pub fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) -> bool {
        let mut title_changed = false;

        if let Some(title) = patch.title {
            title_changed = true;
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(cover_image) = patch.cover_image {
            self.cover_image = cover_image;
        }
        match patch.published {
            Some(true) if !self.published => self.publish(now),
            Some(false) => self.unpublish(),
            _ => {}
        }

        self.updated_at = now;
        title_changed
    }
}
