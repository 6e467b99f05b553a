use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::{Identifiable, SoftDeletable};

/// # Documentation
/// - Top of the ownership tree: an application owns zero or more environments.
/// - Soft-deleting an application soft-deletes all its environments and their variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationModel {
    pub id: i64,

    pub name: HeaplessString<255>,
    pub description: Option<HeaplessString<500>>,

    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields of an application, used both to create and to update it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInput {
    pub name: HeaplessString<255>,
    #[serde(default)]
    pub description: Option<HeaplessString<500>>,
}

impl Identifiable for ApplicationModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl SoftDeletable for ApplicationModel {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
