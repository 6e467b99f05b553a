use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use confkeeper_api::{ApiError, ApiResult};
use heapless::String as HeaplessString;
use sqlx::Postgres;
use uuid::Uuid;

use crate::models::history::{ChangeHistoryModel, NewChangeHistoryModel};
use crate::models::{
    ApplicationInput, ApplicationModel, EnvironmentInput, EnvironmentModel, EnvironmentRefModel,
    SoftDeletable, VariableInput, VariableModel,
};
use crate::repository::{AppendHistory, FindByCode, ListPage, Load, Page, PageRequest};

pub fn create_test_application(id: i64, name: &str, description: Option<&str>) -> ApplicationModel {
    ApplicationModel {
        id,
        name: HeaplessString::try_from(name).unwrap(),
        description: description.map(|d| HeaplessString::try_from(d).unwrap()),
        is_deleted: false,
        created_at: Utc::now(),
        updated_at: None,
        deleted_at: None,
    }
}

pub fn create_test_environment(
    id: i64,
    app_id: i64,
    name: &str,
    description: Option<&str>,
) -> EnvironmentModel {
    EnvironmentModel {
        id,
        name: HeaplessString::try_from(name).unwrap(),
        description: description.map(|d| HeaplessString::try_from(d).unwrap()),
        code: Uuid::new_v4(),
        app_id,
        is_deleted: false,
        created_at: Utc::now(),
        updated_at: None,
        deleted_at: None,
    }
}

pub fn create_test_variable(id: i64, env_id: i64, name: &str, value: &str) -> VariableModel {
    VariableModel {
        id,
        name: HeaplessString::try_from(name).unwrap(),
        value: value.to_string(),
        env_id,
        is_deleted: false,
        created_at: Utc::now(),
        updated_at: None,
        deleted_at: None,
    }
}

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

/// In-memory stand-in for the stores, used to exercise the services without a database
#[derive(Default)]
pub struct InMemoryStore {
    applications: Mutex<HashMap<i64, ApplicationModel>>,
    environments: Mutex<HashMap<i64, EnvironmentModel>>,
    variables: Mutex<HashMap<i64, VariableModel>>,
    history: Mutex<Vec<ChangeHistoryModel>>,
}

impl InMemoryStore {
    pub fn insert_application(&self, item: ApplicationModel) {
        self.applications.lock().unwrap().insert(item.id, item);
    }

    pub fn insert_environment(&self, item: EnvironmentModel) {
        self.environments.lock().unwrap().insert(item.id, item);
    }

    pub fn insert_variable(&self, item: VariableModel) {
        self.variables.lock().unwrap().insert(item.id, item);
    }

    pub fn history(&self) -> Vec<ChangeHistoryModel> {
        self.history.lock().unwrap().clone()
    }
}

fn load_from<T: Clone>(items: &Mutex<HashMap<i64, T>>, kind: &str, id: i64) -> ApiResult<T> {
    items
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("{kind} {id}")))
}

#[async_trait]
impl Load<Postgres, ApplicationModel> for InMemoryStore {
    async fn load(&self, id: i64) -> ApiResult<ApplicationModel> {
        load_from(&self.applications, "Application", id)
    }
}

#[async_trait]
impl Load<Postgres, EnvironmentModel> for InMemoryStore {
    async fn load(&self, id: i64) -> ApiResult<EnvironmentModel> {
        load_from(&self.environments, "Environment", id)
    }
}

#[async_trait]
impl Load<Postgres, VariableModel> for InMemoryStore {
    async fn load(&self, id: i64) -> ApiResult<VariableModel> {
        load_from(&self.variables, "Variable", id)
    }
}

#[async_trait]
impl FindByCode<Postgres, EnvironmentRefModel> for InMemoryStore {
    async fn find_by_code(&self, code: Uuid) -> ApiResult<EnvironmentRefModel> {
        self.environments
            .lock()
            .unwrap()
            .values()
            .find(|env| env.code == code && !env.is_deleted())
            .map(EnvironmentModel::to_ref)
            .ok_or_else(|| ApiError::NotFound(format!("Environment with code '{code}'")))
    }
}

#[async_trait]
impl ListPage<Postgres, VariableModel> for InMemoryStore {
    type Scope = i64;

    async fn list(&self, env_id: i64, page: Option<PageRequest>) -> ApiResult<Page<VariableModel>> {
        let mut items: Vec<VariableModel> = self
            .variables
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.env_id == env_id && !v.is_deleted())
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(match page {
            Some(page) => {
                let total = items.len();
                let items = items.into_iter().skip(page.offset).take(page.limit).collect();
                Page::new(items, total, page.limit, page.offset)
            }
            None => Page::unpaginated(items),
        })
    }

    async fn count(&self, env_id: i64) -> ApiResult<usize> {
        Ok(self.list(env_id, None).await?.total)
    }
}

#[async_trait]
impl AppendHistory<Postgres> for InMemoryStore {
    async fn append(&self, record: NewChangeHistoryModel) -> ApiResult<ChangeHistoryModel> {
        let mut history = self.history.lock().unwrap();
        let model = record.into_model(history.len() as i64 + 1);
        history.push(model.clone());
        Ok(model)
    }
}
