use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::ApiResult;
use confkeeper_db::repository::SoftDelete;
use sqlx::Postgres;
use tracing::debug;

use super::repo_impl::VariableRepositoryImpl;
use crate::repository::configuration::EnvironmentRepositoryImpl;
use crate::utils::ensure_exists;

impl VariableRepositoryImpl {
    pub(super) async fn soft_delete_impl(repo: &VariableRepositoryImpl, id: i64) -> ApiResult<()> {
        let deleted_at = Utc::now();
        let mut tx = repo.pool.begin().await?;

        let env_id: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE variables
            SET is_deleted = TRUE, deleted_at = $2
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING env_id
            "#,
        )
        .bind(id)
        .bind(deleted_at)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(env_id) = env_id else {
            return ensure_exists(&mut tx, "variables", "Variable", id).await;
        };

        EnvironmentRepositoryImpl::touch_in(&mut tx, env_id, deleted_at).await?;
        tx.commit().await?;
        debug!(variable_id = id, env_id, "soft-deleted variable");
        Ok(())
    }
}

#[async_trait]
impl SoftDelete<Postgres> for VariableRepositoryImpl {
    async fn soft_delete(&self, id: i64) -> ApiResult<()> {
        Self::soft_delete_impl(self, id).await
    }
}
