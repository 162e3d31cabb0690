//! Core traits defined in `jobboard-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
