//! CLI command implementations

pub mod allocate;
pub mod comment;
pub mod create;
pub mod delete;
pub mod list;
pub mod move_cmd;
pub mod pick_up;
pub mod serve;
pub mod show;
pub mod statuses;
pub mod summary;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::load_config;
use crate::errors::Result;
use crate::fs::{resolve_cwd, resolve_data_file};
use crate::schemas::{Config, WorkItem};
use crate::store::{ItemService, JsonFileStore, SystemClock};
use crate::views::format_duration;

/// Flags shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalOptions<'a> {
    pub cwd: Option<&'a Path>,
    pub data_file: Option<&'a Path>,
    pub actor: Option<&'a str>,
}

/// Resolved configuration plus a service over the item file
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub service: Arc<ItemService<JsonFileStore>>,
}

impl Workspace {
    pub fn open(opts: &GlobalOptions<'_>) -> Result<Self> {
        let root = resolve_cwd(opts.cwd);
        let mut config = load_config(&root)?;
        if let Some(data_file) = opts.data_file {
            config.data_file = data_file.to_path_buf();
        }
        let path = resolve_data_file(&root, &config.data_file);
        tracing::debug!("using item file {}", path.display());

        let service = ItemService::new(JsonFileStore::new(path), Arc::new(SystemClock));
        Ok(Workspace {
            root,
            config,
            service: Arc::new(service),
        })
    }

    /// The --actor flag, or the configured default.
    pub fn actor<'a>(&'a self, opts: &GlobalOptions<'a>) -> &'a str {
        opts.actor.unwrap_or(&self.config.default_actor)
    }
}

/// One-line confirmation printed after a mutating command.
pub fn describe(item: &WorkItem) -> String {
    let assignee = item.assignee.as_deref().unwrap_or("unassigned");
    format!(
        "{}  {}  [{}]  {}  spent {}",
        item.id,
        item.title,
        item.status.label(),
        assignee,
        format_duration(item.spent_ms)
    )
}
