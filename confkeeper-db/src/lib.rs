pub mod models;
pub mod repository;
pub mod service;

pub use models::*;

#[cfg(test)]
pub(crate) mod test_utils;
