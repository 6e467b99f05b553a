use chrono::{DateTime, Utc};
use confkeeper_api::ApiResult;
use sqlx::PgConnection;

use super::repo_impl::EnvironmentRepositoryImpl;

impl EnvironmentRepositoryImpl {
    /// Mark an environment as modified because one of its variables changed
    pub(crate) async fn touch_in(
        conn: &mut PgConnection,
        id: i64,
        at: DateTime<Utc>,
    ) -> ApiResult<()> {
        sqlx::query(r#"UPDATE environments SET updated_at = $2 WHERE id = $1"#)
            .bind(id)
            .bind(at)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
