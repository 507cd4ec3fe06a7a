//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Persistence gateway (pooled PostgreSQL connection, bounded queries)
//! - Password hashing (Argon2id)
//! - Random token generation and hashing
//! - Client identification for anonymous visitors

pub mod client;
pub mod crypto;
pub mod database;
pub mod password;
