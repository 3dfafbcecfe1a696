//! Move command - Move an item to another status
//!
//! Moving to `pick_up` goes through the pick-up path with the acting user.

use crate::errors::Result;
use crate::store::TransitionRequest;

use super::{describe, GlobalOptions, Workspace};

pub async fn run(opts: &GlobalOptions<'_>, id: &str, status: &str) -> Result<()> {
    let workspace = Workspace::open(opts)?;
    let request = TransitionRequest {
        status: status.to_string(),
        actor: Some(workspace.actor(opts).to_string()),
    };
    let item = workspace.service.transition(id, request).await?;
    println!("{}", describe(&item));
    Ok(())
}
