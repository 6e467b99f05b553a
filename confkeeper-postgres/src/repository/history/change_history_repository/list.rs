use async_trait::async_trait;
use confkeeper_api::ApiResult;
use confkeeper_db::models::history::{ChangeHistoryModel, HistoryEntityType};
use confkeeper_db::repository::{ListPage, Page, PageRequest};
use sqlx::Postgres;

use super::repo_impl::ChangeHistoryRepositoryImpl;
use crate::utils::{count_to_usize, page_bounds, TryFromRow};

impl ChangeHistoryRepositoryImpl {
    pub(super) async fn list_impl(
        repo: &ChangeHistoryRepositoryImpl,
        entity_type: HistoryEntityType,
        entity_id: i64,
        page: Option<PageRequest>,
    ) -> ApiResult<Page<ChangeHistoryModel>> {
        let (limit, offset) = page_bounds(page);
        let rows = sqlx::query(
            r#"
            SELECT * FROM change_history
            WHERE entity_type = $1 AND entity_id = $2
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(entity_type.as_str())
        .bind(entity_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&*repo.pool)
        .await?;

        let items = rows
            .iter()
            .map(ChangeHistoryModel::try_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        match page {
            Some(page) => {
                let total = Self::count_impl(repo, entity_type, entity_id).await?;
                Ok(Page::new(items, total, page.limit, page.offset))
            }
            None => Ok(Page::unpaginated(items)),
        }
    }

    pub(super) async fn count_impl(
        repo: &ChangeHistoryRepositoryImpl,
        entity_type: HistoryEntityType,
        entity_id: i64,
    ) -> ApiResult<usize> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM change_history WHERE entity_type = $1 AND entity_id = $2"#,
        )
        .bind(entity_type.as_str())
        .bind(entity_id)
        .fetch_one(&*repo.pool)
        .await?;

        Ok(count_to_usize(count))
    }
}

#[async_trait]
impl ListPage<Postgres, ChangeHistoryModel> for ChangeHistoryRepositoryImpl {
    type Scope = (HistoryEntityType, i64);

    async fn list(
        &self,
        scope: (HistoryEntityType, i64),
        page: Option<PageRequest>,
    ) -> ApiResult<Page<ChangeHistoryModel>> {
        let (entity_type, entity_id) = scope;
        Self::list_impl(self, entity_type, entity_id, page).await
    }

    async fn count(&self, scope: (HistoryEntityType, i64)) -> ApiResult<usize> {
        let (entity_type, entity_id) = scope;
        Self::count_impl(self, entity_type, entity_id).await
    }
}
