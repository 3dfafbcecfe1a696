//! Input and admission checks used by the lifecycle engine

use crate::errors::{CaseflowError, Result};
use crate::schemas::{Status, WorkItem};

/// Trim `value` and reject it if nothing is left.
pub fn require_non_empty(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CaseflowError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Check if the item is actively held by `actor`.
pub fn is_held_by(item: &WorkItem, actor: &str) -> bool {
    item.status == Status::PickUp && item.assignee.as_deref() == Some(actor)
}

/// Find the item `actor` currently holds in `pick_up`, if any.
pub fn active_item_for<'a>(items: &'a [WorkItem], actor: &str) -> Option<&'a WorkItem> {
    items.iter().find(|item| is_held_by(item, actor))
}

/// Admission rule: an actor works on at most one item at a time.
///
/// `item_id` is the item being picked up; holding that same item does not
/// count against the actor.
pub fn ensure_actor_free(items: &[WorkItem], actor: &str, item_id: &str) -> Result<()> {
    match items
        .iter()
        .find(|item| item.id != item_id && is_held_by(item, actor))
    {
        Some(active) => Err(CaseflowError::ActorBusy {
            actor: actor.to_string(),
            active_item: active.id.clone(),
        }),
        None => Ok(()),
    }
}
