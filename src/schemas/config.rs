//! Config schema - Configuration for caseflow

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration for caseflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// JSON document holding the whole item collection
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Address the API server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port the API server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Actor used by the CLI when --actor is not given
    #[serde(default = "default_actor")]
    pub default_actor: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_data_file() -> PathBuf {
    PathBuf::from("items.json")
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5174
}

fn default_actor() -> String {
    "mahi".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            data_file: default_data_file(),
            bind_address: default_bind_address(),
            port: default_port(),
            default_actor: default_actor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.data_file, PathBuf::from("items.json"));
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 5174);
        assert_eq!(config.default_actor, "mahi");
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"port": 8080}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.port, 8080);
        assert_eq!(parsed.data_file, PathBuf::from("items.json"));
        assert_eq!(parsed.default_actor, "mahi");
    }
}
