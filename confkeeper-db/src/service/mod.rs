pub mod change_history_recorder;
pub mod configuration_reader;

pub use change_history_recorder::ChangeHistoryRecorder;
pub use configuration_reader::ConfigurationReader;
