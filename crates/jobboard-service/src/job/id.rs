//! Job identifier generation.

use jobboard_core::result::AppResult;
use jobboard_core::types::JobId;

/// Source of fresh job identifiers.
pub trait IdGenerator: Send + Sync + 'static {
    /// Produce a new identifier. Fails only if the random source does.
    fn generate(&self) -> AppResult<JobId>;
}

/// Generates 8 character ids from 6 bytes of OS randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortIdGenerator;

impl ShortIdGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for ShortIdGenerator {
    fn generate(&self) -> AppResult<JobId> {
        JobId::generate()
    }
}
