//! # jobboard-database
//!
//! PostgreSQL connection management, the embedded schema migrations, and
//! the concrete job repository.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::JobRepository;
