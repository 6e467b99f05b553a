use async_trait::async_trait;
use confkeeper_api::ApiResult;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading entities by their ID
///
/// Loading is a direct lookup: soft-deleted entities are returned as well, with their
/// deletion flag set.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<Postgres, ApplicationModel> for ApplicationRepositoryImpl {
///     async fn load(&self, id: i64) -> ApiResult<ApplicationModel> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<DB: Database, T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The id of the entity to load
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded entity
    /// * `Err(ApiError::NotFound)` - If no entity has this id
    async fn load(&self, id: i64) -> ApiResult<T>;
}
