//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Append-only repository over a single entity table.
///
/// Implementations own the stored rows; callers hold no entity state of
/// their own between requests.
#[async_trait]
pub trait Repository<Entity>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
{
    /// Insert one entity in a single round trip.
    async fn insert(&self, entity: &Entity) -> AppResult<()>;

    /// Return every stored entity.
    ///
    /// No ordering is guaranteed. An empty table yields an empty vector.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;
}
