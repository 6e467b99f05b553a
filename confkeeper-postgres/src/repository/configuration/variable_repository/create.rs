use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::ApiResult;
use confkeeper_db::models::{NewVariable, VariableModel};
use confkeeper_db::repository::Create;
use sqlx::Postgres;
use tracing::debug;

use super::repo_impl::VariableRepositoryImpl;
use crate::repository::configuration::EnvironmentRepositoryImpl;
use crate::utils::TryFromRow;

impl VariableRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &VariableRepositoryImpl,
        input: NewVariable,
    ) -> ApiResult<VariableModel> {
        let now = Utc::now();
        let mut tx = repo.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO variables (name, value, env_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(input.name.as_str())
        .bind(input.value.as_str())
        .bind(input.env_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        let variable = VariableModel::try_from_row(&row)?;

        EnvironmentRepositoryImpl::touch_in(&mut tx, variable.env_id, now).await?;
        tx.commit().await?;

        debug!(variable_id = variable.id, env_id = variable.env_id, "created variable");
        Ok(variable)
    }
}

#[async_trait]
impl Create<Postgres, VariableModel> for VariableRepositoryImpl {
    type Input = NewVariable;

    async fn create(&self, input: NewVariable) -> ApiResult<VariableModel> {
        Self::create_impl(self, input).await
    }
}
