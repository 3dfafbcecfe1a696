//! Delete command - Remove an item

use crate::errors::Result;

use super::{GlobalOptions, Workspace};

pub async fn run(opts: &GlobalOptions<'_>, id: &str) -> Result<()> {
    let workspace = Workspace::open(opts)?;
    workspace.service.delete(id).await?;
    println!("Deleted {}", id);
    Ok(())
}
