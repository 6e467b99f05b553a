use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::{Identifiable, SoftDeletable};

/// # Documentation
/// - A single configuration key/value pair owned by an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableModel {
    pub id: i64,

    pub name: HeaplessString<255>,
    pub value: String,
    pub env_id: i64,

    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVariable {
    pub env_id: i64,
    pub name: HeaplessString<255>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableInput {
    pub name: HeaplessString<255>,
    pub value: String,
}

impl Identifiable for VariableModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl SoftDeletable for VariableModel {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
