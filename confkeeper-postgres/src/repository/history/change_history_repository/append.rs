use async_trait::async_trait;
use confkeeper_api::ApiResult;
use confkeeper_db::models::history::{ChangeHistoryModel, NewChangeHistoryModel};
use confkeeper_db::repository::AppendHistory;
use sqlx::Postgres;
use tracing::debug;

use super::repo_impl::ChangeHistoryRepositoryImpl;

impl ChangeHistoryRepositoryImpl {
    pub(super) async fn append_impl(
        repo: &ChangeHistoryRepositoryImpl,
        record: NewChangeHistoryModel,
    ) -> ApiResult<ChangeHistoryModel> {
        let mut tx = repo.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO change_history (entity_type, entity_id, field, old_value, new_value, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(record.entity_type.as_str())
        .bind(record.entity_id)
        .bind(record.field.as_str())
        .bind(record.old_value.as_deref())
        .bind(record.new_value.as_deref())
        .bind(record.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            history_id = id,
            entity_type = record.entity_type.as_str(),
            entity_id = record.entity_id,
            field = record.field.as_str(),
            "appended change history"
        );
        Ok(record.into_model(id))
    }
}

#[async_trait]
impl AppendHistory<Postgres> for ChangeHistoryRepositoryImpl {
    async fn append(&self, record: NewChangeHistoryModel) -> ApiResult<ChangeHistoryModel> {
        Self::append_impl(self, record).await
    }
}
