pub mod application_repository;
pub mod environment_repository;
pub mod variable_repository;

pub use application_repository::ApplicationRepositoryImpl;
pub use environment_repository::EnvironmentRepositoryImpl;
pub use variable_repository::VariableRepositoryImpl;

#[cfg(test)]
pub mod test_utils;
