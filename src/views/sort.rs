//! Grid sorting

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::total_spent;
use crate::errors::{CaseflowError, Result};
use crate::schemas::{Timestamp, WorkItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Title,
    ReceivedDate,
    LoggedDate,
    Assignee,
    Status,
    StartTime,
    EndTime,
    TimeSpent,
}

impl std::str::FromStr for SortKey {
    type Err = CaseflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(SortKey::Id),
            "title" => Ok(SortKey::Title),
            "receivedDate" | "received" => Ok(SortKey::ReceivedDate),
            "loggedDate" | "logged" => Ok(SortKey::LoggedDate),
            "assignee" => Ok(SortKey::Assignee),
            "status" => Ok(SortKey::Status),
            "startTime" | "start" => Ok(SortKey::StartTime),
            "endTime" | "end" => Ok(SortKey::EndTime),
            "timeSpent" | "spent" => Ok(SortKey::TimeSpent),
            _ => Err(CaseflowError::Validation(format!("unknown sort key: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub key: SortKey,
    pub dir: SortDir,
}

impl Sort {
    pub fn asc(key: SortKey) -> Self {
        Sort { key, dir: SortDir::Asc }
    }

    pub fn desc(key: SortKey) -> Self {
        Sort { key, dir: SortDir::Desc }
    }

    /// Clicking a column header: ascending, then descending, then unsorted.
    pub fn cycle(current: Option<Sort>, key: SortKey) -> Option<Sort> {
        match current {
            Some(sort) if sort.key == key && sort.dir == SortDir::Asc => Some(Sort::desc(key)),
            Some(sort) if sort.key == key => None,
            _ => Some(Sort::asc(key)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue<'a> {
    Number(i128),
    Text(&'a str),
}

fn sort_value(item: &WorkItem, key: SortKey, now: Timestamp) -> SortValue<'_> {
    match key {
        SortKey::Id => SortValue::Text(&item.id),
        SortKey::Title => SortValue::Text(&item.title),
        SortKey::ReceivedDate => SortValue::Number(item.received_date.into()),
        SortKey::LoggedDate => SortValue::Number(item.logged_date.into()),
        SortKey::Assignee => SortValue::Text(item.assignee.as_deref().unwrap_or("")),
        SortKey::Status => SortValue::Text(item.status.label()),
        SortKey::StartTime => SortValue::Number(item.start_time.unwrap_or(0).into()),
        SortKey::EndTime => SortValue::Number(item.end_time.unwrap_or(0).into()),
        SortKey::TimeSpent => SortValue::Number(total_spent(item, now).into()),
    }
}

/// Stable sort of `rows`; `None` keeps the incoming order.
pub fn apply_sort(mut rows: Vec<WorkItem>, sort: Option<Sort>, now: Timestamp) -> Vec<WorkItem> {
    let Some(sort) = sort else {
        return rows;
    };
    rows.sort_by(|a, b| compare(a, b, sort, now));
    rows
}

/// Relative order of two items under `sort`.
pub fn compare(a: &WorkItem, b: &WorkItem, sort: Sort, now: Timestamp) -> Ordering {
    let ordering = sort_value(a, sort.key, now).cmp(&sort_value(b, sort.key, now));
    match sort.dir {
        SortDir::Asc => ordering,
        SortDir::Desc => ordering.reverse(),
    }
}
