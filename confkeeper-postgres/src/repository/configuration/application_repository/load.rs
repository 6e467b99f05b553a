use async_trait::async_trait;
use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::models::ApplicationModel;
use confkeeper_db::repository::Load;
use sqlx::Postgres;

use super::repo_impl::ApplicationRepositoryImpl;
use crate::utils::TryFromRow;

impl ApplicationRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &ApplicationRepositoryImpl,
        id: i64,
    ) -> ApiResult<ApplicationModel> {
        let row = sqlx::query(r#"SELECT * FROM applications WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Application {id}")))?;

        ApplicationModel::try_from_row(&row)
    }
}

#[async_trait]
impl Load<Postgres, ApplicationModel> for ApplicationRepositoryImpl {
    async fn load(&self, id: i64) -> ApiResult<ApplicationModel> {
        Self::load_impl(self, id).await
    }
}
