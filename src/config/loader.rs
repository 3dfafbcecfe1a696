//! Configuration loading with defaults

use std::path::{Path, PathBuf};

use crate::errors::{CaseflowError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration for `root`, falling back to defaults.
///
/// caseflow.json is read if present; then `PORT`, `CASEFLOW_DATA_FILE` and
/// `CASEFLOW_ACTOR` from the environment override it.
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        config.port = port
            .trim()
            .parse()
            .map_err(|_| CaseflowError::ConfigError(format!("PORT is not a valid port: {}", port)))?;
    }
    if let Some(data_file) = lookup("CASEFLOW_DATA_FILE").filter(|v| !v.trim().is_empty()) {
        config.data_file = PathBuf::from(data_file);
    }
    if let Some(actor) = lookup("CASEFLOW_ACTOR").filter(|v| !v.trim().is_empty()) {
        config.default_actor = actor.trim().to_string();
    }
    Ok(config)
}
