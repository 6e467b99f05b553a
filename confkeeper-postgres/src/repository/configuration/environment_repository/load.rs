use async_trait::async_trait;
use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::models::EnvironmentModel;
use confkeeper_db::repository::Load;
use sqlx::Postgres;

use super::repo_impl::EnvironmentRepositoryImpl;
use crate::utils::TryFromRow;

impl EnvironmentRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &EnvironmentRepositoryImpl,
        id: i64,
    ) -> ApiResult<EnvironmentModel> {
        let row = sqlx::query(r#"SELECT * FROM environments WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Environment {id}")))?;

        EnvironmentModel::try_from_row(&row)
    }
}

#[async_trait]
impl Load<Postgres, EnvironmentModel> for EnvironmentRepositoryImpl {
    async fn load(&self, id: i64) -> ApiResult<EnvironmentModel> {
        Self::load_impl(self, id).await
    }
}
