//! Create command - Create a new unallocated item

use crate::errors::Result;
use crate::store::NewItem;

use super::{describe, GlobalOptions, Workspace};

pub async fn run(opts: &GlobalOptions<'_>, id: Option<&str>, title: Option<&str>) -> Result<()> {
    let workspace = Workspace::open(opts)?;
    let item = workspace
        .service
        .create(NewItem {
            id: id.map(str::to_string),
            title: title.map(str::to_string),
            ..Default::default()
        })
        .await?;
    println!("Created {}", describe(&item));
    Ok(())
}
