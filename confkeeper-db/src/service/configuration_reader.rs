use std::sync::Arc;

use confkeeper_api::{ApiError, ApiResult, ConfigurationVariable, ConfigurationView};
use sqlx::Database;
use uuid::Uuid;

use crate::models::{EnvironmentRefModel, VariableModel};
use crate::repository::{FindByCode, ListPage};

/// Read-only composition answering "pull my configuration" for an environment code
pub struct ConfigurationReader<DB: Database> {
    environments: Arc<dyn FindByCode<DB, EnvironmentRefModel>>,
    variables: Arc<dyn ListPage<DB, VariableModel, Scope = i64>>,
}

impl<DB: Database> ConfigurationReader<DB> {
    pub fn new(
        environments: Arc<dyn FindByCode<DB, EnvironmentRefModel>>,
        variables: Arc<dyn ListPage<DB, VariableModel, Scope = i64>>,
    ) -> Self {
        Self {
            environments,
            variables,
        }
    }

    /// Resolve the live environment carrying `code` and return all of its live variables
    ///
    /// # Returns
    /// * `Err(ApiError::NotFound)` - If the code is malformed, unknown or its environment is deleted
    pub async fn get_configuration(&self, code: &str) -> ApiResult<ConfigurationView> {
        let code = Uuid::parse_str(code)
            .map_err(|_| ApiError::NotFound(format!("Environment with code '{code}'")))?;
        let environment = self.environments.find_by_code(code).await?;
        let variables = self.variables.list(environment.id, None).await?;

        Ok(ConfigurationView {
            environment_name: environment.name.to_string(),
            variables: variables
                .items
                .into_iter()
                .map(|variable| ConfigurationVariable {
                    name: variable.name.to_string(),
                    value: variable.value,
                })
                .collect(),
        })
    }
}
