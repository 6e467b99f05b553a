use async_trait::async_trait;
use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::models::history::{ChangeHistoryModel, NewChangeHistoryModel};
use confkeeper_db::repository::{SoftDelete, Update};
use sqlx::Postgres;

use super::repo_impl::ChangeHistoryRepositoryImpl;

#[async_trait]
impl Update<Postgres, ChangeHistoryModel> for ChangeHistoryRepositoryImpl {
    type Input = NewChangeHistoryModel;

    async fn update(&self, id: i64, _input: NewChangeHistoryModel) -> ApiResult<ChangeHistoryModel> {
        Err(ApiError::UnsupportedOperation(format!(
            "Change history record {id} can't be updated"
        )))
    }
}

#[async_trait]
impl SoftDelete<Postgres> for ChangeHistoryRepositoryImpl {
    async fn soft_delete(&self, id: i64) -> ApiResult<()> {
        Err(ApiError::UnsupportedOperation(format!(
            "Change history record {id} can't be deleted"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use confkeeper_db::models::history::HistoryEntityType;
    use confkeeper_db::repository::AppendHistory;
    use heapless::String as HeaplessString;
    use serial_test::serial;
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;

    fn record() -> NewChangeHistoryModel {
        NewChangeHistoryModel {
            entity_type: HistoryEntityType::Applications,
            entity_id: 1,
            field: HeaplessString::try_from("name").unwrap(),
            old_value: Some("before".to_string()),
            new_value: Some("after".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_update_and_delete_are_rejected() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Never connects: the rejection happens before any query
        let pool = PgPoolOptions::new().connect_lazy("postgresql://localhost/unused")?;
        let repo = ChangeHistoryRepositoryImpl::new(Arc::new(pool));

        let updated = repo.update(1, record()).await;
        assert!(matches!(updated, Err(ApiError::UnsupportedOperation(_))));

        let deleted = repo.soft_delete(1).await;
        assert!(matches!(deleted, Err(ApiError::UnsupportedOperation(_))));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_database_rejects_mutation() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let appended = ctx.repos().change_history_repository.append(record()).await?;

        let updated = sqlx::query("UPDATE change_history SET new_value = 'tampered' WHERE id = $1")
            .bind(appended.id)
            .execute(&**ctx.pool())
            .await;
        assert!(updated.is_err());

        let deleted = sqlx::query("DELETE FROM change_history WHERE id = $1")
            .bind(appended.id)
            .execute(&**ctx.pool())
            .await;
        assert!(deleted.is_err());

        Ok(())
    }
}
