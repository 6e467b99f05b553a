use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::models::{VariableInput, VariableModel};
use confkeeper_db::repository::Update;
use sqlx::Postgres;
use tracing::debug;

use super::repo_impl::VariableRepositoryImpl;
use crate::repository::configuration::EnvironmentRepositoryImpl;
use crate::utils::TryFromRow;

impl VariableRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &VariableRepositoryImpl,
        id: i64,
        input: VariableInput,
    ) -> ApiResult<VariableModel> {
        let now = Utc::now();
        let mut tx = repo.pool.begin().await?;

        let row = sqlx::query(
            r#"
            UPDATE variables
            SET name = $2, value = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.name.as_str())
        .bind(input.value.as_str())
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Variable {id}")))?;
        let variable = VariableModel::try_from_row(&row)?;

        EnvironmentRepositoryImpl::touch_in(&mut tx, variable.env_id, now).await?;
        tx.commit().await?;

        debug!(variable_id = id, "updated variable");
        Ok(variable)
    }
}

#[async_trait]
impl Update<Postgres, VariableModel> for VariableRepositoryImpl {
    type Input = VariableInput;

    async fn update(&self, id: i64, input: VariableInput) -> ApiResult<VariableModel> {
        Self::update_impl(self, id, input).await
    }
}
