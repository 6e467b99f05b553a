use async_trait::async_trait;
use confkeeper_api::ApiResult;
use confkeeper_db::models::EnvironmentModel;
use confkeeper_db::repository::{ListPage, Page, PageRequest};
use sqlx::Postgres;

use super::repo_impl::EnvironmentRepositoryImpl;
use crate::utils::{count_to_usize, page_bounds, TryFromRow};

impl EnvironmentRepositoryImpl {
    pub(super) async fn list_impl(
        repo: &EnvironmentRepositoryImpl,
        app_id: i64,
        page: Option<PageRequest>,
    ) -> ApiResult<Page<EnvironmentModel>> {
        let (limit, offset) = page_bounds(page);
        let rows = sqlx::query(
            r#"
            SELECT * FROM environments
            WHERE app_id = $1 AND is_deleted = FALSE
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(app_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&*repo.pool)
        .await?;

        let items = rows
            .iter()
            .map(EnvironmentModel::try_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        match page {
            Some(page) => {
                let total = Self::count_impl(repo, app_id).await?;
                Ok(Page::new(items, total, page.limit, page.offset))
            }
            None => Ok(Page::unpaginated(items)),
        }
    }

    pub(super) async fn count_impl(repo: &EnvironmentRepositoryImpl, app_id: i64) -> ApiResult<usize> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM environments WHERE app_id = $1 AND is_deleted = FALSE"#,
        )
        .bind(app_id)
        .fetch_one(&*repo.pool)
        .await?;

        Ok(count_to_usize(count))
    }
}

#[async_trait]
impl ListPage<Postgres, EnvironmentModel> for EnvironmentRepositoryImpl {
    type Scope = i64;

    async fn list(&self, app_id: i64, page: Option<PageRequest>) -> ApiResult<Page<EnvironmentModel>> {
        Self::list_impl(self, app_id, page).await
    }

    async fn count(&self, app_id: i64) -> ApiResult<usize> {
        Self::count_impl(self, app_id).await
    }
}
