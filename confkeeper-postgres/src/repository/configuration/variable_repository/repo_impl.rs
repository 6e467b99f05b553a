use confkeeper_api::ApiResult;
use confkeeper_db::models::VariableModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::sync::Arc;

pub struct VariableRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl VariableRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for VariableModel {
    fn try_from_row(row: &PgRow) -> ApiResult<Self> {
        Ok(VariableModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            value: row.try_get("value")?,
            env_id: row.try_get("env_id")?,
            is_deleted: row.try_get("is_deleted")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }
}
