//! File system utilities for caseflow
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_items, read_json, write_items, write_json};
pub use paths::{get_config_path, resolve_cwd, resolve_data_file, CONFIG_FILE_NAME};
