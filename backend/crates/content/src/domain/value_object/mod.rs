//! Value Object Module

pub mod pagination;
pub mod post_title;
pub mod slug;
pub mod visitor;
