//! Allocate command - Hand an unallocated item to a handler

use crate::errors::Result;

use super::{describe, GlobalOptions, Workspace};

pub async fn run(opts: &GlobalOptions<'_>, id: &str, handler: &str) -> Result<()> {
    let workspace = Workspace::open(opts)?;
    let item = workspace.service.allocate(id, handler).await?;
    println!("{}", describe(&item));
    Ok(())
}
