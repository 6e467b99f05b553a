use async_trait::async_trait;
use confkeeper_api::ApiResult;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for resolving an entity by its public code
///
/// Only non-deleted entities are matched.
#[async_trait]
pub trait FindByCode<DB: Database, T>: Send + Sync {
    /// # Returns
    /// * `Ok(T)` - The live entity carrying `code`
    /// * `Err(ApiError::NotFound)` - If the code is unknown or its entity is deleted
    async fn find_by_code(&self, code: Uuid) -> ApiResult<T>;
}
