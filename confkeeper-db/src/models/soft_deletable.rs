use chrono::{DateTime, Utc};

use super::identifiable::Identifiable;

/// Trait for entities that are never physically removed, only flagged as deleted
pub trait SoftDeletable: Identifiable {
    /// Returns true once the entity has been soft-deleted
    fn is_deleted(&self) -> bool;

    /// Returns the moment the entity was soft-deleted, if it was
    fn deleted_at(&self) -> Option<DateTime<Utc>>;
}
