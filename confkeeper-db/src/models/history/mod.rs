pub mod change_history;
pub mod diffable;
pub mod entity_update;
pub mod history_entity_type;

pub use change_history::*;
pub use diffable::*;
pub use entity_update::*;
pub use history_entity_type::*;
