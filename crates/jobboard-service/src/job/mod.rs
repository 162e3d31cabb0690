//! Job posting use cases.

pub mod id;
pub mod service;

pub use id::{IdGenerator, ShortIdGenerator};
pub use service::JobService;
