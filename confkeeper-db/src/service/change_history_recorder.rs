use std::sync::Arc;

use chrono::Utc;
use confkeeper_api::ApiResult;
use sqlx::Database;
use tracing::debug;

use crate::models::history::{
    diff, ChangeHistoryModel, Diffable, EntityUpdate, FieldChange, NewChangeHistoryModel,
};
use crate::models::{ApplicationModel, EnvironmentModel, Identifiable, VariableModel};
use crate::repository::{AppendHistory, Load};

/// # Documentation
/// - Records the field-level changes of an update before the update is applied.
/// - The pre-update state is read from the store owning the entity kind; every differing
///   diffable field becomes one history record.
/// - Records of one call share a single timestamp and are appended one by one.
pub struct ChangeHistoryRecorder<DB: Database> {
    applications: Arc<dyn Load<DB, ApplicationModel>>,
    environments: Arc<dyn Load<DB, EnvironmentModel>>,
    variables: Arc<dyn Load<DB, VariableModel>>,
    history: Arc<dyn AppendHistory<DB>>,
}

impl<DB: Database> ChangeHistoryRecorder<DB> {
    pub fn new(
        applications: Arc<dyn Load<DB, ApplicationModel>>,
        environments: Arc<dyn Load<DB, EnvironmentModel>>,
        variables: Arc<dyn Load<DB, VariableModel>>,
        history: Arc<dyn AppendHistory<DB>>,
    ) -> Self {
        Self {
            applications,
            environments,
            variables,
            history,
        }
    }

    /// Diff `update` against the stored state of `entity_id` and persist the changes
    ///
    /// # Returns
    /// * `Ok(Vec<ChangeHistoryModel>)` - The appended records, empty when nothing changed
    /// * `Err(ApiError::NotFound)` - If the entity does not exist
    pub async fn record_changes(
        &self,
        entity_id: i64,
        update: &EntityUpdate,
    ) -> ApiResult<Vec<ChangeHistoryModel>> {
        let changes = match update {
            EntityUpdate::Application(input) => {
                Self::changes_of(self.applications.as_ref(), entity_id, input).await?
            }
            EntityUpdate::Environment(input) => {
                Self::changes_of(self.environments.as_ref(), entity_id, input).await?
            }
            EntityUpdate::Variable(input) => {
                Self::changes_of(self.variables.as_ref(), entity_id, input).await?
            }
        };

        let entity_type = update.entity_type();
        debug!(
            entity_type = entity_type.as_str(),
            entity_id,
            changed_fields = changes.len(),
            "recording change history"
        );

        let created_at = Utc::now();
        let mut records = Vec::with_capacity(changes.len());
        for change in changes {
            let record =
                NewChangeHistoryModel::from_change(entity_type, entity_id, change, created_at)?;
            records.push(self.history.append(record).await?);
        }

        Ok(records)
    }

    /// String-discriminated variant of [`record_changes`](Self::record_changes)
    ///
    /// # Returns
    /// * `Err(ApiError::UnknownEntityType)` - If `entity_type` is not a history discriminator
    /// * `Err(ApiError::ValidationError)` - If `new_data` does not fit the entity kind
    pub async fn record_changes_json(
        &self,
        entity_id: i64,
        entity_type: &str,
        new_data: serde_json::Value,
    ) -> ApiResult<Vec<ChangeHistoryModel>> {
        let update = EntityUpdate::from_json(entity_type, new_data)?;
        self.record_changes(entity_id, &update).await
    }

    async fn changes_of<T: Diffable + Identifiable>(
        store: &dyn Load<DB, T>,
        entity_id: i64,
        incoming: &T::Incoming,
    ) -> ApiResult<Vec<FieldChange>> {
        let current = store.load(entity_id).await?;
        Ok(diff(&current, incoming))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryEntityType;
    use crate::test_utils::{
        application_input, create_test_application, create_test_environment,
        create_test_variable, environment_input, variable_input, InMemoryStore,
    };
    use confkeeper_api::ApiError;
    use serde_json::json;
    use sqlx::Postgres;

    fn recorder(store: &Arc<InMemoryStore>) -> ChangeHistoryRecorder<Postgres> {
        ChangeHistoryRecorder::new(store.clone(), store.clone(), store.clone(), store.clone())
    }

    #[tokio::test]
    async fn test_records_only_changed_field() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = Arc::new(InMemoryStore::default());
        store.insert_variable(create_test_variable(3, 1, "a", "1"));

        let records = recorder(&store)
            .record_changes(3, &EntityUpdate::Variable(variable_input("a", "2")))
            .await?;

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.entity_type, HistoryEntityType::Variables);
        assert_eq!(record.entity_id, 3);
        assert_eq!(record.field.as_str(), "value");
        assert_eq!(record.old_value.as_deref(), Some("1"));
        assert_eq!(record.new_value.as_deref(), Some("2"));
        assert_eq!(store.history().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_records_nothing_for_identical_data() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = Arc::new(InMemoryStore::default());
        store.insert_application(create_test_application(1, "billing", Some("ledger")));

        let records = recorder(&store)
            .record_changes(
                1,
                &EntityUpdate::Application(application_input("billing", Some("ledger"))),
            )
            .await?;

        assert!(records.is_empty());
        assert!(store.history().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_records_share_timestamp() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = Arc::new(InMemoryStore::default());
        store.insert_environment(create_test_environment(5, 1, "staging", None));

        let records = recorder(&store)
            .record_changes(
                5,
                &EntityUpdate::Environment(environment_input("production", Some("live"))),
            )
            .await?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].created_at, records[1].created_at);
        assert!(records
            .iter()
            .all(|r| r.entity_type == HistoryEntityType::Environments && r.entity_id == 5));

        Ok(())
    }

    #[tokio::test]
    async fn test_dispatches_to_owning_store() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = Arc::new(InMemoryStore::default());
        // Same id in every store, different data
        store.insert_application(create_test_application(9, "app", None));
        store.insert_environment(create_test_environment(9, 1, "env", None));
        store.insert_variable(create_test_variable(9, 1, "VAR", "x"));

        let records = recorder(&store)
            .record_changes(9, &EntityUpdate::Environment(environment_input("env", None)))
            .await?;
        assert!(records.is_empty());

        let records = recorder(&store)
            .record_changes(9, &EntityUpdate::Application(application_input("env", None)))
            .await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].old_value.as_deref(), Some("app"));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_entity_is_not_found() {
        let store = Arc::new(InMemoryStore::default());

        let result = recorder(&store)
            .record_changes(42, &EntityUpdate::Variable(variable_input("a", "b")))
            .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert!(store.history().is_empty());
    }

    #[tokio::test]
    async fn test_json_entry_point() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = Arc::new(InMemoryStore::default());
        store.insert_variable(create_test_variable(3, 1, "a", "1"));
        let recorder = recorder(&store);

        let records = recorder
            .record_changes_json(3, "variables", json!({"name": "b", "value": "1", "env_id": 1}))
            .await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field.as_str(), "name");

        let unknown = recorder
            .record_changes_json(3, "secrets", json!({"name": "b", "value": "1"}))
            .await;
        assert!(matches!(unknown, Err(ApiError::UnknownEntityType(ref t)) if t == "secrets"));

        Ok(())
    }
}
