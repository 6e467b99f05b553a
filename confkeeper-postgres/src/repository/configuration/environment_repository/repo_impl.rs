use confkeeper_api::ApiResult;
use confkeeper_db::models::{EnvironmentModel, EnvironmentRefModel};
use confkeeper_db::repository::SoftDeleteByParent;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::sync::Arc;

pub struct EnvironmentRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
    /// Variable store, soft-deleted together with each environment
    pub(crate) variables: Arc<dyn SoftDeleteByParent<Postgres>>,
}

impl EnvironmentRepositoryImpl {
    pub fn new(pool: Arc<PgPool>, variables: Arc<dyn SoftDeleteByParent<Postgres>>) -> Self {
        Self { pool, variables }
    }
}

impl TryFromRow<PgRow> for EnvironmentModel {
    fn try_from_row(row: &PgRow) -> ApiResult<Self> {
        Ok(EnvironmentModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            description: get_optional_heapless_string(row, "description")?,
            code: row.try_get("code")?,
            app_id: row.try_get("app_id")?,
            is_deleted: row.try_get("is_deleted")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }
}

impl TryFromRow<PgRow> for EnvironmentRefModel {
    fn try_from_row(row: &PgRow) -> ApiResult<Self> {
        Ok(EnvironmentRefModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
        })
    }
}
