use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Identifiable, SoftDeletable};

/// # Documentation
/// - An environment belongs to exactly one application and owns zero or more variables.
/// - `code` is generated by the database on insert, unique across all environments
///   (deleted or not) and never changes. External consumers use it to pull configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentModel {
    pub id: i64,

    pub name: HeaplessString<255>,
    pub description: Option<HeaplessString<500>>,
    pub code: Uuid,
    pub app_id: i64,

    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields required to create an environment under an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnvironment {
    pub app_id: i64,
    pub name: HeaplessString<255>,
    #[serde(default)]
    pub description: Option<HeaplessString<500>>,
}

/// Updatable fields of an environment; the owning application and the code are fixed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentInput {
    pub name: HeaplessString<255>,
    #[serde(default)]
    pub description: Option<HeaplessString<500>>,
}

/// Projection returned by the lookup by public code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRefModel {
    pub id: i64,
    pub name: HeaplessString<255>,
}

impl EnvironmentModel {
    pub fn to_ref(&self) -> EnvironmentRefModel {
        EnvironmentRefModel {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl Identifiable for EnvironmentModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for EnvironmentRefModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl SoftDeletable for EnvironmentModel {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
