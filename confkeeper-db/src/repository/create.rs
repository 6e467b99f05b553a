use async_trait::async_trait;
use confkeeper_api::ApiResult;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating a single entity
///
/// The insert runs in its own transaction. Database-generated fields (id, timestamps and,
/// for environments, the public code) are populated on the returned entity.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<Postgres, VariableModel> for VariableRepositoryImpl {
///     type Input = NewVariable;
///
///     async fn create(&self, input: NewVariable) -> ApiResult<VariableModel> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Caller-supplied fields of the new entity
    type Input: Send + 'static;

    /// Insert a new entity
    ///
    /// # Returns
    /// * `Ok(T)` - The persisted entity
    /// * `Err` - A database error, for example a foreign key violation
    async fn create(&self, input: Self::Input) -> ApiResult<T>;
}
