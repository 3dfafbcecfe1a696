//! Path resolution utilities for caseflow

use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE_NAME: &str = "caseflow.json";

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the caseflow.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Resolve the item data file; relative paths are taken from `root`.
pub fn resolve_data_file(root: &Path, data_file: &Path) -> PathBuf {
    if data_file.is_absolute() {
        data_file.to_path_buf()
    } else {
        root.join(data_file)
    }
}
