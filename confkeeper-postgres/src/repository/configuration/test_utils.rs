use confkeeper_api::ApiResult;
use confkeeper_db::models::{
    ApplicationInput, ApplicationModel, EnvironmentInput, EnvironmentModel, NewEnvironment,
    NewVariable, VariableInput, VariableModel,
};
use confkeeper_db::repository::Create;
use heapless::String as HeaplessString;

use crate::postgres_repositories::ConfigurationRepositories;

pub fn application_input(name: &str, description: Option<&str>) -> ApplicationInput {
    ApplicationInput {
        name: HeaplessString::try_from(name).unwrap(),
        description: description.map(|d| HeaplessString::try_from(d).unwrap()),
    }
}

pub fn environment_input(name: &str, description: Option<&str>) -> EnvironmentInput {
    EnvironmentInput {
        name: HeaplessString::try_from(name).unwrap(),
        description: description.map(|d| HeaplessString::try_from(d).unwrap()),
    }
}

pub fn variable_input(name: &str, value: &str) -> VariableInput {
    VariableInput {
        name: HeaplessString::try_from(name).unwrap(),
        value: value.to_string(),
    }
}

pub fn new_environment(app_id: i64, name: &str, description: Option<&str>) -> NewEnvironment {
    NewEnvironment {
        app_id,
        name: HeaplessString::try_from(name).unwrap(),
        description: description.map(|d| HeaplessString::try_from(d).unwrap()),
    }
}

pub fn new_variable(env_id: i64, name: &str, value: &str) -> NewVariable {
    NewVariable {
        env_id,
        name: HeaplessString::try_from(name).unwrap(),
        value: value.to_string(),
    }
}

pub async fn create_application(
    repos: &ConfigurationRepositories,
    name: &str,
) -> ApiResult<ApplicationModel> {
    repos
        .application_repository
        .create(application_input(name, None))
        .await
}

pub async fn create_environment(
    repos: &ConfigurationRepositories,
    app_id: i64,
    name: &str,
) -> ApiResult<EnvironmentModel> {
    repos
        .environment_repository
        .create(new_environment(app_id, name, None))
        .await
}

pub async fn create_variable(
    repos: &ConfigurationRepositories,
    env_id: i64,
    name: &str,
    value: &str,
) -> ApiResult<VariableModel> {
    repos
        .variable_repository
        .create(new_variable(env_id, name, value))
        .await
}

/// An application with `environments` environments of `variables_per_environment` variables each
pub async fn create_application_tree(
    repos: &ConfigurationRepositories,
    environments: usize,
    variables_per_environment: usize,
) -> ApiResult<(ApplicationModel, Vec<EnvironmentModel>, Vec<VariableModel>)> {
    let application = create_application(repos, "tree").await?;
    let mut created_environments = Vec::with_capacity(environments);
    let mut created_variables = Vec::with_capacity(environments * variables_per_environment);

    for e in 0..environments {
        let environment = create_environment(repos, application.id, &format!("env-{e}")).await?;
        for v in 0..variables_per_environment {
            created_variables.push(
                create_variable(repos, environment.id, &format!("VAR_{e}_{v}"), &v.to_string())
                    .await?,
            );
        }
        created_environments.push(environment);
    }

    Ok((application, created_environments, created_variables))
}
