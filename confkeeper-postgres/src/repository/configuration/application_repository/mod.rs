pub mod repo_impl;
pub mod create;
pub mod list;
pub mod load;
pub mod soft_delete;
pub mod touch;
pub mod update;

pub use repo_impl::ApplicationRepositoryImpl;
