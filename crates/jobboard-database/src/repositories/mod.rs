//! Repository implementations for JobBoard entities.

pub mod job;

pub use job::JobRepository;
