//! Test helper module for database-backed tests
//!
//! Tests run against the database named by `DATABASE_URL`. Data is not rolled back, so
//! tests create their own applications and assert relative to what they created.

use crate::config::DatabaseConfig;
use crate::postgres_repositories::{ConfigurationRepositories, PostgresRepositories};
use crate::repository::db_init::init_database;
use sqlx::PgPool;
use std::sync::Arc;

/// Test context holding the repositories and the pool they share
pub struct TestContext {
    pub repos: ConfigurationRepositories,
    pub pool: Arc<PgPool>,
}

impl TestContext {
    pub fn repos(&self) -> &ConfigurationRepositories {
        &self.repos
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }
}

/// Setup a test context on a database with the schema in place
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let application_repo = &ctx.repos().application_repository;
///
///     // Perform test operations...
///
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let config = DatabaseConfig {
        max_connections: 2,
        ..DatabaseConfig::from_env()?
    };
    let pool = Arc::new(config.connect().await?);

    init_database(&pool).await?;

    let repos = PostgresRepositories::new(pool.clone()).create_all_repositories();

    Ok(TestContext { repos, pool })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_setup_is_repeatable() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        setup_test_context().await?;
        let ctx = setup_test_context().await?;

        let tables: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM information_schema.tables
            WHERE table_schema = current_schema()
              AND table_name IN ('applications', 'environments', 'variables', 'change_history')
            "#,
        )
        .fetch_one(&**ctx.pool())
        .await?;
        assert_eq!(tables, 4);

        Ok(())
    }
}
