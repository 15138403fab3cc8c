use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait for CRUD operations
/// Customer and credit stores build on this
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Insert when the entity has no id yet, update otherwise.
    /// Returns the stored entity with its id assigned.
    async fn save(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Delete a previously loaded entity
    async fn delete(&self, entity: T) -> Result<()>;
}
