use async_trait::async_trait;
use confkeeper_api::ApiResult;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating a single entity by its id
///
/// Implementations set `updated_at` to the current time on every update.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Update<DB: Database, T: Identifiable>: Send + Sync {
    /// Updatable fields of the entity
    type Input: Send + 'static;

    /// Update the entity identified by `id`
    ///
    /// # Returns
    /// * `Ok(T)` - The entity as persisted after the update
    /// * `Err(ApiError::NotFound)` - If no entity has this id
    /// * `Err(ApiError::UnsupportedOperation)` - If the entity kind is immutable
    async fn update(&self, id: i64, input: Self::Input) -> ApiResult<T>;
}
