//! Comment command - Append a comment as the acting user

use crate::errors::Result;

use super::{GlobalOptions, Workspace};

pub async fn run(opts: &GlobalOptions<'_>, id: &str, text: &str) -> Result<()> {
    let workspace = Workspace::open(opts)?;
    let author = workspace.actor(opts);
    let item = workspace.service.add_comment(id, author, text).await?;
    println!("{}: {} comment(s)", item.id, item.comments.len());
    Ok(())
}
