//! User Entity
//!
//! A registered account. Created on registration and never mutated
//! afterwards.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Login identifier (unique)
    pub email: Email,
    pub password_hash: UserPassword,
    pub name: DisplayName,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new self-registered user
    ///
    /// Every self-registered account is an administrator: a deployment
    /// serves a single operator.
    pub fn new(email: Email, name: DisplayName, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            name,
            is_admin: true,
            created_at: now,
            updated_at: now,
        }
    }
}
