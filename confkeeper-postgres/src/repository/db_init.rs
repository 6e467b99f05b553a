//! Schema bootstrap
//!
//! Runs the SQL scripts shipped under `migrations/` (create) and `cleanup/` (drop). The
//! create scripts are idempotent, so [`init_database`] can run on every start.

use confkeeper_api::{ApiError, ApiResult};
use sqlx::PgPool;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Order in which the scripts of a directory are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOrder {
    /// By file name, as needed to build the schema up
    Ascending,
    /// Reverse file name, as needed to tear it down
    Descending,
}

pub fn migrations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

pub fn cleanup_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup")
}

/// Create the schema if it is missing
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use confkeeper_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> ApiResult<()> {
    let executed = run_scripts(pool, &migrations_dir(), ScriptOrder::Ascending).await?;
    info!(scripts = executed, "database schema ready");
    Ok(())
}

/// Drop every table, trigger and function the schema owns
pub async fn cleanup_database(pool: &PgPool) -> ApiResult<()> {
    let executed = run_scripts(pool, &cleanup_dir(), ScriptOrder::Descending).await?;
    info!(scripts = executed, "database schema dropped");
    Ok(())
}

/// List the `.sql` files of `dir` in execution order
pub fn sql_scripts(dir: &Path, order: ScriptOrder) -> ApiResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        ApiError::InternalError(format!("cannot read script directory {}: {e}", dir.display()))
    })?;

    let mut scripts: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    scripts.sort();
    if order == ScriptOrder::Descending {
        scripts.reverse();
    }
    Ok(scripts)
}

/// Execute the scripts of `dir`, returning how many ran
async fn run_scripts(pool: &PgPool, dir: &Path, order: ScriptOrder) -> ApiResult<usize> {
    let scripts = sql_scripts(dir, order)?;

    for path in &scripts {
        let sql = fs::read_to_string(path).map_err(|e| {
            ApiError::InternalError(format!("cannot read script {}: {e}", path.display()))
        })?;

        sqlx::raw_sql(&sql).execute(pool).await?;
        debug!(file = %path.display(), "executed sql script");
    }

    Ok(scripts.len())
}
