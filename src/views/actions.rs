//! Which actions a client may offer for an item
//!
//! Derived from the transition table and the admission rule only; the
//! lifecycle engine still has the final say.

use serde::Serialize;

use crate::domain::{allowed_targets, ensure_actor_free};
use crate::schemas::{Status, WorkItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum Action {
    Allocate,
    PickUp,
    Move(Status),
    Comment,
}

/// Actions `actor` can take on `item`, given the full collection.
///
/// A blank actor cannot pick up or comment, so neither is offered.
pub fn available_actions(item: &WorkItem, actor: &str, items: &[WorkItem]) -> Vec<Action> {
    let has_actor = !actor.trim().is_empty();
    let mut actions = Vec::new();
    for &target in allowed_targets(item.status) {
        match target {
            Status::PickUp => {
                if has_actor && ensure_actor_free(items, actor, &item.id).is_ok() {
                    actions.push(Action::PickUp);
                }
            }
            Status::ChReview if item.status == Status::ComplaintUnallocated => {
                actions.push(Action::Allocate);
            }
            other => actions.push(Action::Move(other)),
        }
    }
    if has_actor {
        actions.push(Action::Comment);
    }
    actions
}
