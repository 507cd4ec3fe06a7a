//! Entity Module

pub mod custom_domain;
