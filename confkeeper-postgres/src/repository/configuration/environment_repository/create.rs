use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::ApiResult;
use confkeeper_db::models::{EnvironmentModel, NewEnvironment};
use confkeeper_db::repository::Create;
use sqlx::Postgres;
use tracing::debug;

use super::repo_impl::EnvironmentRepositoryImpl;
use crate::repository::configuration::ApplicationRepositoryImpl;
use crate::utils::TryFromRow;

impl EnvironmentRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &EnvironmentRepositoryImpl,
        input: NewEnvironment,
    ) -> ApiResult<EnvironmentModel> {
        let now = Utc::now();
        let mut tx = repo.pool.begin().await?;

        // code is generated by the database
        let row = sqlx::query(
            r#"
            INSERT INTO environments (name, description, app_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(input.name.as_str())
        .bind(input.description.as_deref())
        .bind(input.app_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        let environment = EnvironmentModel::try_from_row(&row)?;

        ApplicationRepositoryImpl::touch_in(&mut tx, environment.app_id, now).await?;
        tx.commit().await?;

        debug!(
            environment_id = environment.id,
            app_id = environment.app_id,
            code = %environment.code,
            "created environment"
        );
        Ok(environment)
    }
}

#[async_trait]
impl Create<Postgres, EnvironmentModel> for EnvironmentRepositoryImpl {
    type Input = NewEnvironment;

    async fn create(&self, input: NewEnvironment) -> ApiResult<EnvironmentModel> {
        Self::create_impl(self, input).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::configuration::test_utils::{create_application, new_environment};
    use crate::test_helper::setup_test_context;
    use confkeeper_db::repository::{Create, Load};
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_create_generates_unique_codes() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.repos();
        let application = create_application(repos, "storefront").await?;

        let staging = repos
            .environment_repository
            .create(new_environment(application.id, "staging", Some("pre-release")))
            .await?;
        let prod = repos
            .environment_repository
            .create(new_environment(application.id, "prod", None))
            .await?;

        assert_eq!(staging.app_id, application.id);
        assert_eq!(staging.description.as_deref(), Some("pre-release"));
        assert!(prod.description.is_none());
        assert!(!staging.code.is_nil());
        assert_ne!(staging.code, prod.code);

        let application = repos.application_repository.load(application.id).await?;
        assert_eq!(application.updated_at, Some(prod.created_at));

        Ok(())
    }
}
