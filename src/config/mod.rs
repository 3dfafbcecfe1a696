//! Configuration resolution

mod loader;

pub use loader::{apply_env_overrides, load_config};
