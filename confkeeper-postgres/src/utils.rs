use confkeeper_api::{ApiError, ApiResult};
use confkeeper_db::repository::PageRequest;
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, PgConnection, Row};
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> ApiResult<Self>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> ApiResult<HeaplessString<N>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| too_long(col_name, N))
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> ApiResult<Option<HeaplessString<N>>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| too_long(col_name, N))
}

fn too_long(col_name: &str, max: usize) -> ApiError {
    ApiError::ValidationError(format!(
        "Value for column '{col_name}' is too long (max {max} chars)"
    ))
}

/// Converts a `COUNT(*)` result into a length.
pub fn count_to_usize(count: i64) -> usize {
    usize::try_from(count).unwrap_or_default()
}

/// `LIMIT` / `OFFSET` binds for a list query. `None` yields `LIMIT NULL`, i.e. every row.
/// Sizes beyond `i64::MAX` clamp to it.
pub fn page_bounds(page: Option<PageRequest>) -> (Option<i64>, i64) {
    let limit = page.map(|p| i64::try_from(p.limit).unwrap_or(i64::MAX));
    let offset = page.map_or(0, |p| i64::try_from(p.offset).unwrap_or(i64::MAX));
    (limit, offset)
}

/// Resolves an empty conditional soft-delete: `Ok` when the row exists (it was already
/// deleted), `NotFound` otherwise.
pub async fn ensure_exists(
    conn: &mut PgConnection,
    table: &'static str,
    kind: &str,
    id: i64,
) -> ApiResult<()> {
    let query = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)");
    let exists: bool = sqlx::query_scalar(&query)
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    if exists {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("{kind} {id}")))
    }
}
