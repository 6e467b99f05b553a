use confkeeper_api::ApiResult;
use confkeeper_db::models::ApplicationModel;
use confkeeper_db::repository::SoftDeleteByParent;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::sync::Arc;

pub struct ApplicationRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
    /// Environment store, soft-deleted together with each application
    pub(crate) environments: Arc<dyn SoftDeleteByParent<Postgres>>,
}

impl ApplicationRepositoryImpl {
    pub fn new(pool: Arc<PgPool>, environments: Arc<dyn SoftDeleteByParent<Postgres>>) -> Self {
        Self { pool, environments }
    }
}

impl TryFromRow<PgRow> for ApplicationModel {
    fn try_from_row(row: &PgRow) -> ApiResult<Self> {
        Ok(ApplicationModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            description: get_optional_heapless_string(row, "description")?,
            is_deleted: row.try_get("is_deleted")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }
}
