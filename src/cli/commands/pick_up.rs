//! Pick-up command - Start working an item as the acting user

use crate::errors::Result;

use super::{describe, GlobalOptions, Workspace};

pub async fn run(opts: &GlobalOptions<'_>, id: &str) -> Result<()> {
    let workspace = Workspace::open(opts)?;
    let actor = workspace.actor(opts);
    let item = workspace.service.pick_up(id, actor).await?;
    println!("{}", describe(&item));
    Ok(())
}
