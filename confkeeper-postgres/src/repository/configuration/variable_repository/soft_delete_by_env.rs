use async_trait::async_trait;
use chrono::{DateTime, Utc};
use confkeeper_api::ApiResult;
use confkeeper_db::repository::SoftDeleteByParent;
use sqlx::{PgConnection, Postgres};
use tracing::info;

use super::repo_impl::VariableRepositoryImpl;

impl VariableRepositoryImpl {
    /// Soft-delete the live variables of an environment inside the caller's transaction
    ///
    /// Only rows that are still live are touched, so previously deleted variables keep
    /// their original `deleted_at`.
    ///
    /// # Returns
    /// Ids of the variables that transitioned
    pub(super) async fn soft_delete_by_env_in(
        conn: &mut PgConnection,
        env_id: i64,
        deleted_at: DateTime<Utc>,
    ) -> ApiResult<Vec<i64>> {
        let ids = sqlx::query_scalar(
            r#"
            UPDATE variables
            SET is_deleted = TRUE, deleted_at = $2
            WHERE env_id = $1 AND is_deleted = FALSE
            RETURNING id
            "#,
        )
        .bind(env_id)
        .bind(deleted_at)
        .fetch_all(&mut *conn)
        .await?;

        Ok(ids)
    }

    pub async fn soft_delete_by_env(&self, env_id: i64) -> ApiResult<Vec<i64>> {
        let mut tx = self.pool.begin().await?;
        let ids = Self::soft_delete_by_env_in(&mut tx, env_id, Utc::now()).await?;
        tx.commit().await?;

        info!(environment_id = env_id, variables = ids.len(), "soft-deleted environment variables");
        Ok(ids)
    }
}

#[async_trait]
impl SoftDeleteByParent<Postgres> for VariableRepositoryImpl {
    async fn soft_delete_by_parent(&self, env_id: i64) -> ApiResult<Vec<i64>> {
        self.soft_delete_by_env(env_id).await
    }

    async fn soft_delete_by_parent_in(
        &self,
        conn: &mut PgConnection,
        env_id: i64,
        deleted_at: DateTime<Utc>,
    ) -> ApiResult<Vec<i64>> {
        Self::soft_delete_by_env_in(conn, env_id, deleted_at).await
    }
}
