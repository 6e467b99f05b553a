use async_trait::async_trait;
use confkeeper_api::ApiResult;
use confkeeper_db::models::ApplicationModel;
use confkeeper_db::repository::{ListPage, Page, PageRequest};
use sqlx::Postgres;

use super::repo_impl::ApplicationRepositoryImpl;
use crate::utils::{count_to_usize, page_bounds, TryFromRow};

impl ApplicationRepositoryImpl {
    pub(super) async fn list_impl(
        repo: &ApplicationRepositoryImpl,
        page: Option<PageRequest>,
    ) -> ApiResult<Page<ApplicationModel>> {
        let (limit, offset) = page_bounds(page);
        let rows = sqlx::query(
            r#"
            SELECT * FROM applications
            WHERE is_deleted = FALSE
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&*repo.pool)
        .await?;

        let items = rows
            .iter()
            .map(ApplicationModel::try_from_row)
            .collect::<ApiResult<Vec<_>>>()?;

        match page {
            Some(page) => {
                let total = Self::count_impl(repo).await?;
                Ok(Page::new(items, total, page.limit, page.offset))
            }
            None => Ok(Page::unpaginated(items)),
        }
    }

    pub(super) async fn count_impl(repo: &ApplicationRepositoryImpl) -> ApiResult<usize> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM applications WHERE is_deleted = FALSE"#)
                .fetch_one(&*repo.pool)
                .await?;

        Ok(count_to_usize(count))
    }
}

#[async_trait]
impl ListPage<Postgres, ApplicationModel> for ApplicationRepositoryImpl {
    type Scope = ();

    async fn list(&self, _scope: (), page: Option<PageRequest>) -> ApiResult<Page<ApplicationModel>> {
        Self::list_impl(self, page).await
    }

    async fn count(&self, _scope: ()) -> ApiResult<usize> {
        Self::count_impl(self).await
    }
}
