pub mod identifiable;
pub mod soft_deletable;
pub mod application;
pub mod environment;
pub mod variable;
pub mod history;

// Re-exports
pub use identifiable::*;
pub use soft_deletable::*;
pub use application::*;
pub use environment::*;
pub use variable::*;
pub use history::*;
