use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::ApiResult;
use confkeeper_db::repository::{SoftDelete, SoftDeleteByParent};
use sqlx::Postgres;
use tracing::info;

use super::repo_impl::EnvironmentRepositoryImpl;
use crate::repository::configuration::ApplicationRepositoryImpl;
use crate::utils::ensure_exists;

impl EnvironmentRepositoryImpl {
    /// Soft-delete an environment and sweep its live variables in one transaction
    ///
    /// The sweep also runs when the environment was already deleted, so variables created
    /// under it afterwards are retired too.
    pub(super) async fn soft_delete_impl(repo: &EnvironmentRepositoryImpl, id: i64) -> ApiResult<()> {
        let deleted_at = Utc::now();
        let mut tx = repo.pool.begin().await?;

        let app_id: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE environments
            SET is_deleted = TRUE, deleted_at = $2
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING app_id
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .fetch_optional(&mut *tx)
        .await?;

        match app_id {
            Some(app_id) => ApplicationRepositoryImpl::touch_in(&mut tx, app_id, deleted_at).await?,
            None => ensure_exists(&mut tx, "environments", "Environment", id).await?,
        }

        let variables = repo
            .variables
            .soft_delete_by_parent_in(&mut *tx, id, deleted_at)
            .await?;
        tx.commit().await?;

        info!(environment_id = id, variables = variables.len(), "soft-deleted environment");
        Ok(())
    }
}

#[async_trait]
impl SoftDelete<Postgres> for EnvironmentRepositoryImpl {
    async fn soft_delete(&self, id: i64) -> ApiResult<()> {
        Self::soft_delete_impl(self, id).await
    }
}
