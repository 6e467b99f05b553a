use confkeeper_api::ApiResult;
use confkeeper_db::models::history::EntityUpdate;
use confkeeper_db::models::{
    ApplicationInput, ApplicationModel, EnvironmentInput, EnvironmentModel, VariableInput,
    VariableModel,
};
use confkeeper_db::repository::Update;
use confkeeper_db::service::{ChangeHistoryRecorder, ConfigurationReader};
use sqlx::{PgPool, Postgres};
use std::sync::Arc;

use crate::repository::configuration::{
    ApplicationRepositoryImpl, EnvironmentRepositoryImpl, VariableRepositoryImpl,
};
use crate::repository::history::ChangeHistoryRepositoryImpl;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create all repositories and services on top of the shared pool
    pub fn create_all_repositories(&self) -> ConfigurationRepositories {
        let variable_repository = Arc::new(VariableRepositoryImpl::new(self.pool.clone()));
        let environment_repository = Arc::new(EnvironmentRepositoryImpl::new(
            self.pool.clone(),
            variable_repository.clone(),
        ));
        let application_repository = Arc::new(ApplicationRepositoryImpl::new(
            self.pool.clone(),
            environment_repository.clone(),
        ));
        let change_history_repository =
            Arc::new(ChangeHistoryRepositoryImpl::new(self.pool.clone()));

        let change_history_recorder = Arc::new(ChangeHistoryRecorder::new(
            application_repository.clone(),
            environment_repository.clone(),
            variable_repository.clone(),
            change_history_repository.clone(),
        ));
        let configuration_reader = Arc::new(ConfigurationReader::new(
            environment_repository.clone(),
            variable_repository.clone(),
        ));

        ConfigurationRepositories {
            application_repository,
            environment_repository,
            variable_repository,
            change_history_repository,
            change_history_recorder,
            configuration_reader,
        }
    }
}

pub struct ConfigurationRepositories {
    pub application_repository: Arc<ApplicationRepositoryImpl>,
    pub environment_repository: Arc<EnvironmentRepositoryImpl>,
    pub variable_repository: Arc<VariableRepositoryImpl>,
    pub change_history_repository: Arc<ChangeHistoryRepositoryImpl>,
    pub change_history_recorder: Arc<ChangeHistoryRecorder<Postgres>>,
    pub configuration_reader: Arc<ConfigurationReader<Postgres>>,
}

impl ConfigurationRepositories {
    /// Record the changed fields of an application, then apply the update
    pub async fn update_application(
        &self,
        id: i64,
        input: ApplicationInput,
    ) -> ApiResult<ApplicationModel> {
        self.change_history_recorder
            .record_changes(id, &EntityUpdate::Application(input.clone()))
            .await?;
        self.application_repository.update(id, input).await
    }

    /// Record the changed fields of an environment, then apply the update
    pub async fn update_environment(
        &self,
        id: i64,
        input: EnvironmentInput,
    ) -> ApiResult<EnvironmentModel> {
        self.change_history_recorder
            .record_changes(id, &EntityUpdate::Environment(input.clone()))
            .await?;
        self.environment_repository.update(id, input).await
    }

    /// Record the changed fields of a variable, then apply the update
    pub async fn update_variable(&self, id: i64, input: VariableInput) -> ApiResult<VariableModel> {
        self.change_history_recorder
            .record_changes(id, &EntityUpdate::Variable(input.clone()))
            .await?;
        self.variable_repository.update(id, input).await
    }
}
