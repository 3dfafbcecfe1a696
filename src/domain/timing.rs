//! Derived timing queries
//!
//! Nothing here is stored; every value is recomputed from `start_time`,
//! `end_time` and `spent_ms`.

use crate::schemas::{Status, Timestamp, WorkItem};

/// Milliseconds from `from` to `to`, clamped at zero.
pub fn span_ms(from: Timestamp, to: Timestamp) -> u64 {
    u64::try_from(to.saturating_sub(from)).unwrap_or(0)
}

/// An open session has a start and no end.
pub fn has_open_session(item: &WorkItem) -> bool {
    item.start_time.is_some() && item.end_time.is_none()
}

/// Elapsed time of the current (or last recorded) session.
pub fn current_elapsed(item: &WorkItem, now: Timestamp) -> u64 {
    match (item.start_time, item.end_time) {
        (Some(start), None) => span_ms(start, now),
        (Some(start), Some(end)) => span_ms(start, end),
        _ => 0,
    }
}

/// Accumulated time plus the in-progress session, if the item is in `pick_up`.
pub fn total_spent(item: &WorkItem, now: Timestamp) -> u64 {
    let live = match item.start_time {
        Some(start) if item.status == Status::PickUp && item.end_time.is_none() => {
            span_ms(start, now)
        }
        _ => 0,
    };
    item.spent_ms.saturating_add(live)
}
