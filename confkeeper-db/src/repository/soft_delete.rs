use async_trait::async_trait;
use confkeeper_api::ApiResult;
use sqlx::Database;

/// Generic repository trait for soft-deleting an entity by its id
///
/// The entity is flagged (`is_deleted`, `deleted_at`) rather than removed. Implementations
/// for owning entities cascade the deletion to their children. Deleting an entity that is
/// already deleted succeeds without side effects.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait SoftDelete<DB: Database>: Send + Sync {
    /// Soft-delete the entity identified by `id`
    ///
    /// # Returns
    /// * `Ok(())` - The entity is deleted (now or previously)
    /// * `Err(ApiError::NotFound)` - If no entity has this id
    /// * `Err(ApiError::UnsupportedOperation)` - If the entity kind is immutable
    async fn soft_delete(&self, id: i64) -> ApiResult<()>;
}
