//! Value Object Module

pub mod domain_name;
pub mod verify_token;
