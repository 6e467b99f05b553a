use chrono::{DateTime, Utc};
use confkeeper_api::{ApiError, ApiResult};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use super::diffable::FieldChange;
use super::history_entity_type::HistoryEntityType;
use crate::models::Identifiable;

/// # Documentation
/// - One changed field of one entity at the moment of an update.
/// - Append-only: a record is never updated or deleted once written.
/// - All records produced by one update share the same `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeHistoryModel {
    pub id: i64,
    pub entity_type: HistoryEntityType,
    pub entity_id: i64,
    pub field: HeaplessString<100>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A history record that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChangeHistoryModel {
    pub entity_type: HistoryEntityType,
    pub entity_id: i64,
    pub field: HeaplessString<100>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewChangeHistoryModel {
    pub fn from_change(
        entity_type: HistoryEntityType,
        entity_id: i64,
        change: FieldChange,
        created_at: DateTime<Utc>,
    ) -> ApiResult<Self> {
        let field = HeaplessString::try_from(change.field).map_err(|_| {
            ApiError::ValidationError(format!("Field name '{}' is too long", change.field))
        })?;

        Ok(Self {
            entity_type,
            entity_id,
            field,
            old_value: change.old_value,
            new_value: change.new_value,
            created_at,
        })
    }

    pub fn into_model(self, id: i64) -> ChangeHistoryModel {
        ChangeHistoryModel {
            id,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            field: self.field,
            old_value: self.old_value,
            new_value: self.new_value,
            created_at: self.created_at,
        }
    }
}

impl Identifiable for ChangeHistoryModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
