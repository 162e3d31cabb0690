//! # jobboard-entity
//!
//! Domain entity models for JobBoard. Every struct in this crate
//! represents a database table row or the input that creates one.
//! Row types additionally derive `sqlx::FromRow`.

pub mod job;
