//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{CaseflowError, Result};
use crate::schemas::{Config, WorkItem};

use super::paths::get_config_path;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CaseflowError::FileNotFound(path.display().to_string())
        } else {
            CaseflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        CaseflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Writes to a sibling temp file and renames it over the target, so readers
/// never observe a half-written document.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| CaseflowError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read the caseflow.json file in `root`, or defaults if there is none.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read the item collection. A missing file is an empty collection.
pub fn read_items(path: &Path) -> Result<Vec<WorkItem>> {
    match read_json(path) {
        Err(CaseflowError::FileNotFound(_)) => Ok(Vec::new()),
        other => other,
    }
}

/// Replace the item collection on disk.
pub fn write_items(path: &Path, items: &[WorkItem]) -> Result<()> {
    write_json(path, items)
}
