pub mod configuration;
pub mod db_init;
pub mod history;
