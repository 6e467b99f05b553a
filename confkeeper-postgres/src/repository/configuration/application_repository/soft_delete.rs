use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::ApiResult;
use confkeeper_db::repository::{SoftDelete, SoftDeleteByParent};
use sqlx::Postgres;
use tracing::info;

use super::repo_impl::ApplicationRepositoryImpl;
use crate::utils::ensure_exists;

impl ApplicationRepositoryImpl {
    /// Soft-delete an application together with its environments and their variables
    ///
    /// The whole cascade commits or rolls back as one unit and every row it touches gets
    /// the same `deleted_at`. An application that is already deleted keeps its timestamp
    /// but its live environments are still swept.
    pub(super) async fn soft_delete_impl(repo: &ApplicationRepositoryImpl, id: i64) -> ApiResult<()> {
        let deleted_at = Utc::now();
        let mut tx = repo.pool.begin().await?;

        let transitioned: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE applications
            SET is_deleted = TRUE, deleted_at = $2
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .fetch_optional(&mut *tx)
        .await?;

        if transitioned.is_none() {
            ensure_exists(&mut tx, "applications", "Application", id).await?;
        }

        let environments = repo
            .environments
            .soft_delete_by_parent_in(&mut *tx, id, deleted_at)
            .await?;
        tx.commit().await?;

        info!(
            application_id = id,
            environments = environments.len(),
            "soft-deleted application"
        );
        Ok(())
    }
}

#[async_trait]
impl SoftDelete<Postgres> for ApplicationRepositoryImpl {
    async fn soft_delete(&self, id: i64) -> ApiResult<()> {
        Self::soft_delete_impl(self, id).await
    }
}
