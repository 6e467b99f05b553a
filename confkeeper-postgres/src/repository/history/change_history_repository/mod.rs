pub mod repo_impl;
pub mod append;
pub mod immutable;
pub mod list;

pub use repo_impl::ChangeHistoryRepositoryImpl;
