use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::models::{EnvironmentInput, EnvironmentModel};
use confkeeper_db::repository::Update;
use sqlx::Postgres;
use tracing::debug;

use super::repo_impl::EnvironmentRepositoryImpl;
use crate::repository::configuration::ApplicationRepositoryImpl;
use crate::utils::TryFromRow;

impl EnvironmentRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &EnvironmentRepositoryImpl,
        id: i64,
        input: EnvironmentInput,
    ) -> ApiResult<EnvironmentModel> {
        let now = Utc::now();
        let mut tx = repo.pool.begin().await?;

        let row = sqlx::query(
            r#"
            UPDATE environments
            SET name = $2, description = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.name.as_str())
        .bind(input.description.as_deref())
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Environment {id}")))?;
        let environment = EnvironmentModel::try_from_row(&row)?;

        ApplicationRepositoryImpl::touch_in(&mut tx, environment.app_id, now).await?;
        tx.commit().await?;

        debug!(environment_id = id, "updated environment");
        Ok(environment)
    }
}

#[async_trait]
impl Update<Postgres, EnvironmentModel> for EnvironmentRepositoryImpl {
    type Input = EnvironmentInput;

    async fn update(&self, id: i64, input: EnvironmentInput) -> ApiResult<EnvironmentModel> {
        Self::update_impl(self, id, input).await
    }
}
