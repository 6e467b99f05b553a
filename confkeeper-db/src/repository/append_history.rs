use async_trait::async_trait;
use confkeeper_api::ApiResult;
use sqlx::Database;

use crate::models::history::{ChangeHistoryModel, NewChangeHistoryModel};

/// Write side of the change history: records are only ever appended
#[async_trait]
pub trait AppendHistory<DB: Database>: Send + Sync {
    /// Persist one record in its own transaction
    async fn append(&self, record: NewChangeHistoryModel) -> ApiResult<ChangeHistoryModel>;
}
