use async_trait::async_trait;
use chrono::{DateTime, Utc};
use confkeeper_api::ApiResult;
use confkeeper_db::repository::SoftDeleteByParent;
use sqlx::{PgConnection, Postgres};
use tracing::{debug, info};

use super::repo_impl::EnvironmentRepositoryImpl;

impl EnvironmentRepositoryImpl {
    /// Soft-delete the live environments of an application and their variables inside the
    /// caller's transaction
    ///
    /// Environments that were already deleted are skipped together with their variables.
    pub(super) async fn soft_delete_by_app_in(
        repo: &EnvironmentRepositoryImpl,
        conn: &mut PgConnection,
        app_id: i64,
        deleted_at: DateTime<Utc>,
    ) -> ApiResult<Vec<i64>> {
        let environments: Vec<i64> = sqlx::query_scalar(
            r#"
            UPDATE environments
            SET is_deleted = TRUE, deleted_at = $2
            WHERE app_id = $1 AND is_deleted = FALSE
            RETURNING id
            "#,
        )
        .bind(app_id)
        .bind(deleted_at)
        .fetch_all(&mut *conn)
        .await?;

        let mut variables = 0;
        for env_id in &environments {
            variables += repo
                .variables
                .soft_delete_by_parent_in(&mut *conn, *env_id, deleted_at)
                .await?
                .len();
        }

        debug!(
            application_id = app_id,
            environments = environments.len(),
            variables,
            "cascaded application soft-delete"
        );
        Ok(environments)
    }

    pub async fn soft_delete_by_app(&self, app_id: i64) -> ApiResult<Vec<i64>> {
        let mut tx = self.pool.begin().await?;
        let environments = Self::soft_delete_by_app_in(self, &mut tx, app_id, Utc::now()).await?;
        tx.commit().await?;

        info!(
            application_id = app_id,
            environments = environments.len(),
            "soft-deleted application environments"
        );
        Ok(environments)
    }
}

#[async_trait]
impl SoftDeleteByParent<Postgres> for EnvironmentRepositoryImpl {
    async fn soft_delete_by_parent(&self, app_id: i64) -> ApiResult<Vec<i64>> {
        self.soft_delete_by_app(app_id).await
    }

    async fn soft_delete_by_parent_in(
        &self,
        conn: &mut PgConnection,
        app_id: i64,
        deleted_at: DateTime<Utc>,
    ) -> ApiResult<Vec<i64>> {
        Self::soft_delete_by_app_in(self, conn, app_id, deleted_at).await
    }
}
