use async_trait::async_trait;
use chrono::{DateTime, Utc};
use confkeeper_api::ApiResult;
use sqlx::Database;

/// Cascade entry point: soft-delete every live child of a parent entity
///
/// Parent stores hold their child store behind this trait and call
/// [`SoftDeleteByParent::soft_delete_by_parent_in`] from inside their own soft-delete
/// transaction.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait SoftDeleteByParent<DB: Database>: Send + Sync {
    /// Soft-delete all non-deleted children of `parent_id` in a transaction of its own
    ///
    /// # Returns
    /// * `Ok(Vec<i64>)` - Ids of the children that transitioned to deleted by this call.
    ///   Children that were already deleted are left untouched and not returned.
    /// * `Err` - An error if the transaction could not be executed
    async fn soft_delete_by_parent(&self, parent_id: i64) -> ApiResult<Vec<i64>>;

    /// Same as [`SoftDeleteByParent::soft_delete_by_parent`], joining the caller's transaction
    ///
    /// Every child that transitions (including grandchildren) gets `deleted_at`.
    async fn soft_delete_by_parent_in(
        &self,
        conn: &mut DB::Connection,
        parent_id: i64,
        deleted_at: DateTime<Utc>,
    ) -> ApiResult<Vec<i64>>;
}
