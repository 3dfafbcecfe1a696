//! Item schema - The complaint work item type

use serde::{Deserialize, Serialize};

use super::Status;

/// Epoch milliseconds
pub type Timestamp = i64;

/// A note attached to an item. Never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// When the comment was added
    #[serde(alias = "timestamp")]
    pub ts: Timestamp,

    /// Who wrote it
    pub author: String,

    /// Comment body, already trimmed
    pub text: String,
}

/// A complaint tracked through the workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Free-text description
    pub title: String,

    /// Handler the item is assigned to (null when unassigned)
    #[serde(default)]
    pub assignee: Option<String>,

    /// Current workflow status
    pub status: Status,

    /// Start of the open pick-up session
    #[serde(default)]
    pub start_time: Option<Timestamp>,

    /// When the last pick-up session closed
    #[serde(default)]
    pub end_time: Option<Timestamp>,

    /// Total of all closed pick-up sessions
    #[serde(default)]
    pub spent_ms: u64,

    /// Chronological comment log
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// When the complaint was received
    pub received_date: Timestamp,

    /// When the complaint was logged
    pub logged_date: Timestamp,
}

impl WorkItem {
    /// Create a new unallocated item with no timing state
    pub fn new(id: impl Into<String>, title: impl Into<String>, now: Timestamp) -> Self {
        WorkItem {
            id: id.into(),
            title: title.into(),
            assignee: None,
            status: Status::ComplaintUnallocated,
            start_time: None,
            end_time: None,
            spent_ms: 0,
            comments: Vec::new(),
            received_date: now,
            logged_date: now,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new WorkItem with the given status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Return a new WorkItem with the given assignee
    pub fn with_assignee(mut self, assignee: Option<String>) -> Self {
        self.assignee = assignee;
        self
    }

    /// Return a new WorkItem with the given session endpoints
    pub fn with_session(mut self, start_time: Option<Timestamp>, end_time: Option<Timestamp>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Return a new WorkItem with the given accumulated time
    pub fn with_spent_ms(mut self, spent_ms: u64) -> Self {
        self.spent_ms = spent_ms;
        self
    }

    /// Return a new WorkItem with a comment appended
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Return a new WorkItem with the received/logged dates replaced
    pub fn with_dates(mut self, received_date: Timestamp, logged_date: Timestamp) -> Self {
        self.received_date = received_date;
        self.logged_date = logged_date;
        self
    }

    /// Most recent comment, if any
    pub fn latest_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }
}
