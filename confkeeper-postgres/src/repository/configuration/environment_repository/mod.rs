pub mod repo_impl;
pub mod create;
pub mod find_by_code;
pub mod list;
pub mod load;
pub mod soft_delete;
pub mod soft_delete_by_app;
pub mod touch;
pub mod update;

pub use repo_impl::EnvironmentRepositoryImpl;
