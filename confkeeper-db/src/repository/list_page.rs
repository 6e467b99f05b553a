use async_trait::async_trait;
use confkeeper_api::ApiResult;
use sqlx::Database;

use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for listing the live entities of a scope
///
/// Soft-deleted entities are excluded. Items are ordered newest-created first.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The listed item type
///
/// # Example
/// ```ignore
/// use confkeeper_db::repository::pagination::PageRequest;
///
/// // Second page of ten variables of environment 7
/// let page = variable_repo.list(7, Some(PageRequest::for_page(10, 2))).await?;
/// println!("{} of {}", page.items.len(), page.total);
/// ```
#[async_trait]
pub trait ListPage<DB: Database, T>: Send + Sync {
    /// What the listing is restricted to, e.g. the owning environment id
    type Scope: Copy + Send + Sync + 'static;

    /// List the entities of `scope`
    ///
    /// # Arguments
    /// * `scope` - The listing scope
    /// * `page` - Pagination parameters, or `None` for the full list
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested items together with the total count of the scope
    async fn list(&self, scope: Self::Scope, page: Option<PageRequest>) -> ApiResult<Page<T>>;

    /// Count the live entities of `scope`
    async fn count(&self, scope: Self::Scope) -> ApiResult<usize>;
}
