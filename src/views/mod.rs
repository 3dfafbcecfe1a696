//! Per-role read models over the item collection
//!
//! Managers see everything, handlers see their own queue, referral teams see
//! the items parked in a referral status. All three share column filters and
//! sorting.

mod actions;
mod filter;
mod sort;
mod summary;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::{CaseflowError, Result};
use crate::schemas::{Status, Timestamp, WorkItem};

pub use actions::{available_actions, Action};
pub use filter::{ColumnFilter, TimeRange, DAY_MS};
pub use sort::{apply_sort, compare, Sort, SortDir, SortKey};
pub use summary::{summary, StatusCount, Summary, Totals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Manager,
    #[serde(alias = "user")]
    Handler,
    #[serde(alias = "referrals")]
    Referral,
}

impl std::str::FromStr for View {
    type Err = CaseflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "manager" => Ok(View::Manager),
            "handler" | "user" => Ok(View::Handler),
            "referral" | "referrals" => Ok(View::Referral),
            _ => Err(CaseflowError::Validation(format!("unknown view: {}", s))),
        }
    }
}

/// Manager roll-up tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickFilter {
    #[default]
    All,
    Pipeline,
    Completed,
}

impl QuickFilter {
    pub fn matches(self, item: &WorkItem) -> bool {
        match self {
            QuickFilter::All => true,
            QuickFilter::Pipeline => item.status != Status::ChComplaintClosed,
            QuickFilter::Completed => item.status == Status::ChComplaintClosed,
        }
    }
}

impl std::str::FromStr for QuickFilter {
    type Err = CaseflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(QuickFilter::All),
            "pipeline" => Ok(QuickFilter::Pipeline),
            "completed" => Ok(QuickFilter::Completed),
            _ => Err(CaseflowError::Validation(format!("unknown quick filter: {}", s))),
        }
    }
}

fn select<P>(items: &[WorkItem], keep: P, filter: &ColumnFilter, sort: Option<Sort>, now: Timestamp) -> Vec<WorkItem>
where
    P: Fn(&WorkItem) -> bool,
{
    let rows = items
        .iter()
        .filter(|item| keep(item) && filter.matches(item, now))
        .cloned()
        .collect();
    apply_sort(rows, sort, now)
}

pub fn manager_rows(
    items: &[WorkItem],
    filter: &ColumnFilter,
    quick: QuickFilter,
    sort: Option<Sort>,
    now: Timestamp,
) -> Vec<WorkItem> {
    select(items, |item| quick.matches(item), filter, sort, now)
}

/// The actor's own items plus the unassigned, unallocated pool.
pub fn handler_rows(
    items: &[WorkItem],
    actor: &str,
    filter: &ColumnFilter,
    sort: Option<Sort>,
    now: Timestamp,
) -> Vec<WorkItem> {
    select(
        items,
        |item| match item.assignee.as_deref() {
            Some(assignee) => assignee == actor,
            None => item.status == Status::ComplaintUnallocated,
        },
        filter,
        sort,
        now,
    )
}

pub fn referral_rows(
    items: &[WorkItem],
    filter: &ColumnFilter,
    sort: Option<Sort>,
    now: Timestamp,
) -> Vec<WorkItem> {
    select(items, |item| item.status.is_referral(), filter, sort, now)
}

/// `"0s"` under a second, otherwise `"[Hh ]MMm SSs"`.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        return "0s".to_string();
    }
    let secs = ms / 1000;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else {
        format!("{:02}m {:02}s", minutes, seconds)
    }
}

/// `DD-Mon-YYYY` in UTC, or `"—"` when absent.
pub fn format_date(ts: Option<Timestamp>) -> String {
    ts.and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%d-%b-%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// `YYYY-MM-DD HH:MM:SS` in UTC, or `"—"` when absent.
pub fn format_datetime(ts: Option<Timestamp>) -> String {
    ts.and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Vec<WorkItem> {
        vec![
            WorkItem::new("W-1", "unallocated", 0),
            WorkItem::new("W-2", "mine", 0)
                .with_assignee(Some("mahi".to_string()))
                .with_status(Status::ChReview),
            WorkItem::new("W-3", "someone else", 0)
                .with_assignee(Some("alice".to_string()))
                .with_status(Status::RefToClient),
            WorkItem::new("W-4", "closed", 0)
                .with_assignee(Some("mahi".to_string()))
                .with_status(Status::ChComplaintClosed),
            WorkItem::new("W-5", "timeline", 0).with_status(Status::RefToTimelineUpdate),
        ]
    }

    fn ids(rows: &[WorkItem]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_manager_quick_filters() {
        let items = collection();
        let all = manager_rows(&items, &ColumnFilter::default(), QuickFilter::All, None, 0);
        assert_eq!(all.len(), 5);
        let pipeline = manager_rows(&items, &ColumnFilter::default(), QuickFilter::Pipeline, None, 0);
        assert_eq!(ids(&pipeline), vec!["W-1", "W-2", "W-3", "W-5"]);
        let completed = manager_rows(&items, &ColumnFilter::default(), QuickFilter::Completed, None, 0);
        assert_eq!(ids(&completed), vec!["W-4"]);
    }

    #[test]
    fn test_handler_rows() {
        let items = collection();
        let rows = handler_rows(&items, "mahi", &ColumnFilter::default(), None, 0);
        assert_eq!(ids(&rows), vec!["W-1", "W-2", "W-4"]);
    }

    #[test]
    fn test_referral_rows() {
        let items = collection();
        let rows = referral_rows(
            &items,
            &ColumnFilter::default(),
            Some(Sort::desc(SortKey::Id)),
            0,
        );
        assert_eq!(ids(&rows), vec!["W-5", "W-3"]);
    }

    #[test]
    fn test_rows_apply_column_filter() {
        let items = collection();
        let filter = ColumnFilter {
            title: "MINE".to_string(),
            ..Default::default()
        };
        let rows = manager_rows(&items, &filter, QuickFilter::All, None, 0);
        assert_eq!(ids(&rows), vec!["W-2"]);
    }

    #[test]
    fn test_view_and_quick_from_str() {
        assert_eq!("handler".parse::<View>().unwrap(), View::Handler);
        assert_eq!("referrals".parse::<View>().unwrap(), View::Referral);
        assert!("admin".parse::<View>().is_err());
        assert_eq!("pipeline".parse::<QuickFilter>().unwrap(), QuickFilter::Pipeline);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(999), "0s");
        assert_eq!(format_duration(3_500), "00m 03s");
        assert_eq!(format_duration(65_000), "01m 05s");
        assert_eq!(format_duration(3_723_000), "1h 02m 03s");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some(0)), "01-Jan-1970");
        assert_eq!(format_datetime(Some(90_061_000)), "1970-01-02 01:01:01");
    }
}
