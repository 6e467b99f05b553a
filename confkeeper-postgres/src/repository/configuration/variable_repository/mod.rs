pub mod repo_impl;
pub mod create;
pub mod list;
pub mod load;
pub mod soft_delete;
pub mod soft_delete_by_env;
pub mod update;

pub use repo_impl::VariableRepositoryImpl;
