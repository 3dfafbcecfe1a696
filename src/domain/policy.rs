//! Transition policy
//!
//! The adjacency table below is the single source of truth for the workflow
//! graph:
//! complaint_unallocated → ch_review → pick_up → (closed | a referral queue |
//! rwol_product), referral queues → ch_referral_complete, and
//! ch_referral_complete / rwol_product → ch_review or pick_up.

use crate::errors::{CaseflowError, Result};
use crate::schemas::Status;

/// Every status a work item may move to straight out of `pick_up`.
const FROM_PICK_UP: &[Status] = &[
    Status::ChComplaintClosed,
    Status::RefToBoUk,
    Status::RefToBoInd,
    Status::RefToFinance,
    Status::RefToAps,
    Status::RefToCuw,
    Status::RefToFct,
    Status::RefToClient,
    Status::RefToRs,
    Status::RefToPh,
    Status::RwolProduct,
    Status::RefToTimelineUpdate,
];

const RESUME: &[Status] = &[Status::ChReview, Status::PickUp];

/// Returns the statuses directly reachable from `from`.
///
/// An empty slice means `from` is terminal.
pub fn allowed_targets(from: Status) -> &'static [Status] {
    match from {
        Status::ComplaintUnallocated => &[Status::ChReview],
        Status::ChReview => &[Status::PickUp],
        Status::PickUp => FROM_PICK_UP,
        Status::RefToBoUk
        | Status::RefToBoInd
        | Status::RefToFinance
        | Status::RefToAps
        | Status::RefToCuw
        | Status::RefToFct
        | Status::RefToClient
        | Status::RefToRs
        | Status::RefToPh
        | Status::RefToTimelineUpdate => &[Status::ChReferralComplete],
        Status::ChReferralComplete => RESUME,
        Status::RwolProduct => RESUME,
        Status::ChComplaintClosed => &[],
    }
}

/// Check whether moving from `from` to `to` is legal.
///
/// Self-transitions are rejected because no status lists itself.
pub fn is_allowed(from: Status, to: Status) -> bool {
    allowed_targets(from).contains(&to)
}

/// Check if a status has no outgoing transitions.
pub fn is_terminal(status: Status) -> bool {
    allowed_targets(status).is_empty()
}

/// The status every new item starts in.
pub fn initial_status() -> Status {
    Status::ComplaintUnallocated
}

/// Like [`is_allowed`], but as a typed failure.
pub fn check_transition(from: Status, to: Status) -> Result<()> {
    if is_allowed(from, to) {
        Ok(())
    } else {
        Err(CaseflowError::InvalidTransition { from, to })
    }
}

/// [`is_allowed`] over raw symbols from the transport boundary.
///
/// Fails with `UnknownStatus` when either symbol is outside the status set.
pub fn is_allowed_str(from: &str, to: &str) -> Result<bool> {
    let from: Status = from.parse()?;
    let to: Status = to.parse()?;
    Ok(is_allowed(from, to))
}
