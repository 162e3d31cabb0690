//! # jobboard-service
//!
//! Business logic service layer for JobBoard. Services follow constructor
//! injection: the repository and the identifier source are provided at
//! construction time via `Arc` references.

pub mod job;

pub use job::{IdGenerator, JobService, ShortIdGenerator};
