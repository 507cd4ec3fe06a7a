//! Infrastructure Layer

pub mod disk;

pub use disk::{DiskSink, DiskStore};
