//! Utility modules

pub mod debounce;
pub mod paths;

pub use debounce::Debouncer;
pub use paths::{config_path, database_path, init_data_dir, log_file_path};
