//! Status schema - the fixed set of complaint workflow statuses

use serde::{Deserialize, Serialize};

use crate::errors::CaseflowError;

/// Workflow status for a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Initial status - waiting for a manager to allocate a handler
    ComplaintUnallocated,
    /// Allocated to a complaint handler for review
    ChReview,
    /// Actively being worked; the only status that runs the session timer
    PickUp,
    /// Terminal status
    ChComplaintClosed,
    RefToBoUk,
    RefToBoInd,
    RefToFinance,
    RefToAps,
    RefToCuw,
    RefToFct,
    RefToClient,
    RefToRs,
    RefToPh,
    /// Back with the handler after a referral
    ChReferralComplete,
    RwolProduct,
    RefToTimelineUpdate,
}

impl Status {
    /// Every status in canonical order.
    pub const ALL: [Status; 16] = [
        Status::ComplaintUnallocated,
        Status::ChReview,
        Status::PickUp,
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
        Status::ChReferralComplete,
        Status::RwolProduct,
        Status::RefToTimelineUpdate,
    ];

    /// The wire symbol, as stored in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::ComplaintUnallocated => "complaint_unallocated",
            Status::ChReview => "ch_review",
            Status::PickUp => "pick_up",
            Status::ChComplaintClosed => "ch_complaint_closed",
            Status::RefToBoUk => "ref_to_bo_uk",
            Status::RefToBoInd => "ref_to_bo_ind",
            Status::RefToFinance => "ref_to_finance",
            Status::RefToAps => "ref_to_aps",
            Status::RefToCuw => "ref_to_cuw",
            Status::RefToFct => "ref_to_fct",
            Status::RefToClient => "ref_to_client",
            Status::RefToRs => "ref_to_rs",
            Status::RefToPh => "ref_to_ph",
            Status::ChReferralComplete => "ch_referral_complete",
            Status::RwolProduct => "rwol_product",
            Status::RefToTimelineUpdate => "ref_to_timeline_update",
        }
    }

    /// Short display label
    pub fn label(self) -> &'static str {
        match self {
            Status::ComplaintUnallocated => "Complaint Unallocated",
            Status::ChReview => "CH Review",
            Status::PickUp => "Pick up",
            Status::ChComplaintClosed => "CH Complaint Closed",
            Status::RefToBoUk => "Ref to BO UK",
            Status::RefToBoInd => "Ref to BO Ind",
            Status::RefToFinance => "Ref to Finance",
            Status::RefToAps => "Ref to APS",
            Status::RefToCuw => "Ref to C&UW",
            Status::RefToFct => "Ref to FCT",
            Status::RefToClient => "Ref to Client",
            Status::RefToRs => "Ref to RS",
            Status::RefToPh => "Ref to PH",
            Status::ChReferralComplete => "CH Referral Complete",
            Status::RwolProduct => "RWOL Product",
            Status::RefToTimelineUpdate => "Ref to Timeline Update",
        }
    }

    /// Longer description shown as a tooltip
    pub fn description(self) -> &'static str {
        match self {
            Status::ComplaintUnallocated => "Complaint request is yet to be allocated to CH for review",
            Status::ChReview => "Complaint allocated to CH for review",
            Status::PickUp => "Complaint Request is picked up for processing",
            Status::ChComplaintClosed => "Complaint is closed by the CH",
            Status::RefToBoUk => "Ref to UK Backoffice for further action",
            Status::RefToBoInd => "Ref to India Backoffice for further action",
            Status::RefToFinance => "Ref to Finance for further action",
            Status::RefToAps => "Ref to APS for calculations and pending action",
            Status::RefToCuw => "Ref to Claims & Underwriting team",
            Status::RefToFct => "Ref to Financial Crime Team for decision/guidance",
            Status::RefToClient => "Ref to Client for direction or decision",
            Status::RefToRs => "Awaiting details from the Receiving Scheme",
            Status::RefToPh => "Awaiting details/documents from Policy Holder",
            Status::ChReferralComplete => "Returned to complaint handler post referral actions",
            Status::RwolProduct => "Complaints related to RWOL Product",
            Status::RefToTimelineUpdate => "Referred to India team for Timeline updation",
        }
    }

    /// True for the downstream referral queues (`ref_to_*`).
    pub fn is_referral(self) -> bool {
        matches!(
            self,
            Status::RefToBoUk
                | Status::RefToBoInd
                | Status::RefToFinance
                | Status::RefToAps
                | Status::RefToCuw
                | Status::RefToFct
                | Status::RefToClient
                | Status::RefToRs
                | Status::RefToPh
                | Status::RefToTimelineUpdate
        )
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = CaseflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == symbol)
            .ok_or_else(|| CaseflowError::UnknownStatus(symbol.to_string()))
    }
}
