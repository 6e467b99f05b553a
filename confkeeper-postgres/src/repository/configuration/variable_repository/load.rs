use async_trait::async_trait;
use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::models::VariableModel;
use confkeeper_db::repository::Load;
use sqlx::Postgres;

use super::repo_impl::VariableRepositoryImpl;
use crate::utils::TryFromRow;

impl VariableRepositoryImpl {
    pub(super) async fn load_impl(repo: &VariableRepositoryImpl, id: i64) -> ApiResult<VariableModel> {
        let row = sqlx::query(r#"SELECT * FROM variables WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Variable {id}")))?;

        VariableModel::try_from_row(&row)
    }
}

#[async_trait]
impl Load<Postgres, VariableModel> for VariableRepositoryImpl {
    async fn load(&self, id: i64) -> ApiResult<VariableModel> {
        Self::load_impl(self, id).await
    }
}
