//! Consistency checks over item snapshots and whole collections

use std::collections::HashSet;

use crate::errors::{CaseflowError, Result};
use crate::schemas::{Status, WorkItem};

use super::timing::has_open_session;

/// Verify the per-item timing invariants.
///
/// - in `pick_up`, a session is open (start set, end clear)
/// - elsewhere, no session is open
pub fn check_item(item: &WorkItem) -> Result<()> {
    let open = has_open_session(item);
    if item.status == Status::PickUp && !open {
        return Err(CaseflowError::Validation(format!(
            "{} is in pick_up without an open session",
            item.id
        )));
    }
    if item.status != Status::PickUp && open {
        return Err(CaseflowError::Validation(format!(
            "{} has an open session while in {}",
            item.id, item.status
        )));
    }
    if item.status != Status::PickUp && item.start_time.is_some() {
        return Err(CaseflowError::Validation(format!(
            "{} keeps a start time outside pick_up",
            item.id
        )));
    }
    Ok(())
}

/// Verify collection-wide invariants: unique ids and one active item per actor.
pub fn check_collection(items: &[WorkItem]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut actors = HashSet::new();
    for item in items {
        if !ids.insert(item.id.as_str()) {
            return Err(CaseflowError::Validation(format!("duplicate item id {}", item.id)));
        }
        if item.status != Status::PickUp {
            continue;
        }
        if let Some(actor) = item.assignee.as_deref() {
            if !actors.insert(actor) {
                return Err(CaseflowError::Validation(format!(
                    "{} holds more than one active item",
                    actor
                )));
            }
        }
    }
    Ok(())
}
