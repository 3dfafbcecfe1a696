//! Item lifecycle engine
//!
//! Pure functions for applying workflow operations to items. None of them
//! mutates its input: each returns a fully-formed new snapshot or an error,
//! and on error the caller still holds the untouched original.

use crate::errors::{CaseflowError, Result};
use crate::schemas::{Comment, Status, Timestamp, WorkItem};

use super::policy::check_transition;
use super::timing::{has_open_session, span_ms};
use super::validation::{ensure_actor_free, require_non_empty};

/// Assign an item to a handler and move it to `ch_review`.
///
/// Timing fields are left alone.
pub fn allocate(item: &WorkItem, handler: &str) -> Result<WorkItem> {
    let handler = require_non_empty(handler, "handler")?;
    check_transition(item.status, Status::ChReview)?;

    Ok(item
        .clone()
        .with_assignee(Some(handler))
        .with_status(Status::ChReview))
}

/// Move an item into `pick_up` for `actor`, opening a session.
///
/// `items` is the whole collection, used for the one-active-item-per-actor
/// rule. An already open session keeps its original start.
pub fn pick_up(item: &WorkItem, actor: &str, items: &[WorkItem], now: Timestamp) -> Result<WorkItem> {
    let actor = require_non_empty(actor, "actor")?;
    ensure_actor_free(items, &actor, &item.id)?;
    check_transition(item.status, Status::PickUp)?;

    let start = if has_open_session(item) {
        item.start_time.unwrap_or(now)
    } else {
        now
    };

    Ok(item
        .clone()
        .with_assignee(Some(actor))
        .with_status(Status::PickUp)
        .with_session(Some(start), None))
}

/// Move an item to `target`.
///
/// Leaving `pick_up` closes the open session and adds it to `spent_ms`.
/// Entering `pick_up` needs an actor and goes through [`pick_up`] instead.
pub fn move_to(item: &WorkItem, target: Status, now: Timestamp) -> Result<WorkItem> {
    check_transition(item.status, target)?;
    if target == Status::PickUp {
        return Err(CaseflowError::Validation(
            "entering pick_up requires an acting actor".to_string(),
        ));
    }

    let next = item.clone().with_status(target);
    if item.status != Status::PickUp {
        return Ok(next);
    }

    match item.start_time {
        Some(start) => {
            let session = span_ms(start, now);
            Ok(next
                .with_session(None, Some(now))
                .with_spent_ms(item.spent_ms.saturating_add(session)))
        }
        None => {
            tracing::warn!(item = %item.id, "leaving pick_up without a recorded start");
            Ok(next)
        }
    }
}

/// Append a comment. No status change, no policy involvement.
pub fn add_comment(item: &WorkItem, author: &str, text: &str, now: Timestamp) -> Result<WorkItem> {
    let author = require_non_empty(author, "author")?;
    let text = require_non_empty(text, "comment text")?;

    Ok(item.clone().with_comment(Comment { ts: now, author, text }))
}
