//! Serve command - Run the HTTP API server

use crate::errors::Result;
use crate::server;

use super::{GlobalOptions, Workspace};

/// Run the API server until interrupted
pub async fn run(opts: &GlobalOptions<'_>, port: Option<u16>, bind: Option<&str>) -> Result<()> {
    let mut workspace = Workspace::open(opts)?;
    if let Some(port) = port {
        workspace.config.port = port;
    }
    if let Some(bind) = bind {
        workspace.config.bind_address = bind.to_string();
    }
    tracing::info!("serving items from {}", workspace.root.display());
    server::serve(&workspace.config, workspace.service).await
}
