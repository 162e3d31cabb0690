//! Core type definitions used across the JobBoard workspace.

pub mod id;

pub use id::*;
