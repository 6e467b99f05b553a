use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::ApiResult;
use confkeeper_db::models::{ApplicationInput, ApplicationModel};
use confkeeper_db::repository::Create;
use sqlx::Postgres;
use tracing::debug;

use super::repo_impl::ApplicationRepositoryImpl;
use crate::utils::TryFromRow;

impl ApplicationRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ApplicationRepositoryImpl,
        input: ApplicationInput,
    ) -> ApiResult<ApplicationModel> {
        let mut tx = repo.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO applications (name, description, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(input.name.as_str())
        .bind(input.description.as_deref())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;
        let application = ApplicationModel::try_from_row(&row)?;

        tx.commit().await?;

        debug!(application_id = application.id, "created application");
        Ok(application)
    }
}

#[async_trait]
impl Create<Postgres, ApplicationModel> for ApplicationRepositoryImpl {
    type Input = ApplicationInput;

    async fn create(&self, input: ApplicationInput) -> ApiResult<ApplicationModel> {
        Self::create_impl(self, input).await
    }
}
