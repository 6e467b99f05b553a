pub mod append_history;
pub mod create;
pub mod find_by_code;
pub mod list_page;
pub mod load;
pub mod pagination;
pub mod soft_delete;
pub mod soft_delete_by_parent;
pub mod update;

// Re-exports
pub use append_history::*;
pub use create::*;
pub use find_by_code::*;
pub use list_page::*;
pub use load::*;
pub use pagination::*;
pub use soft_delete::*;
pub use soft_delete_by_parent::*;
pub use update::*;
