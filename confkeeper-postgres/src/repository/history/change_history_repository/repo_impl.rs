use confkeeper_api::ApiResult;
use confkeeper_db::models::history::ChangeHistoryModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::sync::Arc;

/// Append-only store of field-level change records
pub struct ChangeHistoryRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ChangeHistoryRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ChangeHistoryModel {
    fn try_from_row(row: &PgRow) -> ApiResult<Self> {
        let entity_type: String = row.try_get("entity_type")?;
        Ok(ChangeHistoryModel {
            id: row.try_get("id")?,
            entity_type: entity_type.parse()?,
            entity_id: row.try_get("entity_id")?,
            field: get_heapless_string(row, "field")?,
            old_value: row.try_get("old_value")?,
            new_value: row.try_get("new_value")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
