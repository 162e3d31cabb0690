//! # jobboard-core
//!
//! Core crate for JobBoard. Contains the repository trait, configuration
//! schemas, the short job identifier, and the unified error system.
//!
//! This crate has **no** internal dependencies on other JobBoard crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
