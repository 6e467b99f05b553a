pub mod change_history_repository;

pub use change_history_repository::ChangeHistoryRepositoryImpl;
