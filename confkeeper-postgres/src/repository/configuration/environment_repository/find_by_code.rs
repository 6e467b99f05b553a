use async_trait::async_trait;
use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::models::EnvironmentRefModel;
use confkeeper_db::repository::FindByCode;
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::EnvironmentRepositoryImpl;
use crate::utils::TryFromRow;

impl EnvironmentRepositoryImpl {
    pub(super) async fn find_by_code_impl(
        repo: &EnvironmentRepositoryImpl,
        code: Uuid,
    ) -> ApiResult<EnvironmentRefModel> {
        let row = sqlx::query(
            r#"SELECT id, name FROM environments WHERE code = $1 AND is_deleted = FALSE"#,
        )
        .bind(code)
        .fetch_optional(&*repo.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Environment with code '{code}'")))?;

        EnvironmentRefModel::try_from_row(&row)
    }
}

#[async_trait]
impl FindByCode<Postgres, EnvironmentRefModel> for EnvironmentRepositoryImpl {
    async fn find_by_code(&self, code: Uuid) -> ApiResult<EnvironmentRefModel> {
        Self::find_by_code_impl(self, code).await
    }
}
