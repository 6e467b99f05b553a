use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::models::{ApplicationInput, ApplicationModel};
use confkeeper_db::repository::Update;
use sqlx::Postgres;
use tracing::debug;

use super::repo_impl::ApplicationRepositoryImpl;
use crate::utils::TryFromRow;

impl ApplicationRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ApplicationRepositoryImpl,
        id: i64,
        input: ApplicationInput,
    ) -> ApiResult<ApplicationModel> {
        let mut tx = repo.pool.begin().await?;

        let row = sqlx::query(
            r#"
            UPDATE applications
            SET name = $2, description = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.name.as_str())
        .bind(input.description.as_deref())
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Application {id}")))?;
        let application = ApplicationModel::try_from_row(&row)?;

        tx.commit().await?;

        debug!(application_id = id, "updated application");
        Ok(application)
    }
}

#[async_trait]
impl Update<Postgres, ApplicationModel> for ApplicationRepositoryImpl {
    type Input = ApplicationInput;

    async fn update(&self, id: i64, input: ApplicationInput) -> ApiResult<ApplicationModel> {
        Self::update_impl(self, id, input).await
    }
}
