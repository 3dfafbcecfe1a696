//! Per-column filters shared by every grid

use serde::Deserialize;

use crate::domain::total_spent;
use crate::schemas::{Timestamp, WorkItem};

/// One day in milliseconds
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Inclusive time window; either end may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TimeRange {
    #[serde(default)]
    pub from: Option<Timestamp>,
    #[serde(default)]
    pub to: Option<Timestamp>,
}

impl TimeRange {
    pub fn is_set(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Check `ts` against the window. With `whole_day`, `to` is a date and
    /// the window extends to the end of that day.
    pub fn contains(&self, ts: Option<Timestamp>, whole_day: bool) -> bool {
        let Some(ts) = ts else {
            return false;
        };
        if matches!(self.from, Some(from) if ts < from) {
            return false;
        }
        if let Some(to) = self.to {
            let limit = if whole_day { to.saturating_add(DAY_MS - 1) } else { to };
            if ts > limit {
                return false;
            }
        }
        true
    }
}

/// Column filters. Empty strings and unset ranges match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnFilter {
    pub id: String,
    pub title: String,
    pub assignee: String,
    /// Matched against the status label
    pub status: String,
    /// Matched against all comment texts
    pub comments: String,
    pub received: TimeRange,
    pub logged: TimeRange,
    pub start: TimeRange,
    pub end: TimeRange,
    /// Lower bound on total time spent, in seconds
    pub time_min_secs: Option<u64>,
    /// Upper bound on total time spent, in seconds
    pub time_max_secs: Option<u64>,
}

impl ColumnFilter {
    pub fn matches(&self, item: &WorkItem, now: Timestamp) -> bool {
        if !contains(&item.id, &self.id)
            || !contains(&item.title, &self.title)
            || !contains(item.assignee.as_deref().unwrap_or(""), &self.assignee)
            || !contains(item.status.label(), &self.status)
        {
            return false;
        }

        if self.received.is_set() && !self.received.contains(Some(item.received_date), true) {
            return false;
        }
        if self.logged.is_set() && !self.logged.contains(Some(item.logged_date), true) {
            return false;
        }
        if self.start.is_set() && !self.start.contains(item.start_time, false) {
            return false;
        }
        if self.end.is_set() && !self.end.contains(item.end_time, false) {
            return false;
        }

        if self.time_min_secs.is_some() || self.time_max_secs.is_some() {
            let spent = total_spent(item, now);
            if matches!(self.time_min_secs, Some(min) if spent < min.saturating_mul(1000)) {
                return false;
            }
            if matches!(self.time_max_secs, Some(max) if spent > max.saturating_mul(1000)) {
                return false;
            }
        }

        if !self.comments.trim().is_empty() {
            let joined = item
                .comments
                .iter()
                .map(|c| c.text.as_str())
                .collect::<Vec<_>>()
                .join(" | ");
            if !contains(&joined, &self.comments) {
                return false;
            }
        }

        true
    }
}

// Case-insensitive substring match; a blank needle matches anything.
fn contains(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Comment, Status};

    fn item() -> WorkItem {
        WorkItem::new("W-4821", "Missing pension statement", 10 * DAY_MS)
            .with_assignee(Some("Mahi".to_string()))
            .with_status(Status::RefToFinance)
            .with_session(None, Some(10 * DAY_MS + 5_000))
            .with_spent_ms(90_000)
            .with_comment(Comment {
                ts: 1,
                author: "mahi".to_string(),
                text: "Asked finance for the refund amount".to_string(),
            })
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ColumnFilter::default().matches(&item(), 0));
    }

    #[test]
    fn test_text_filters_are_case_insensitive() {
        let filter = ColumnFilter {
            id: "w-48".to_string(),
            title: "PENSION".to_string(),
            assignee: "mah".to_string(),
            status: "ref to fin".to_string(),
            comments: "refund".to_string(),
            ..Default::default()
        };
        assert!(filter.matches(&item(), 0));

        let miss = ColumnFilter {
            status: "pick up".to_string(),
            ..Default::default()
        };
        assert!(!miss.matches(&item(), 0));
    }

    #[test]
    fn test_date_range_covers_whole_day() {
        let filter = ColumnFilter {
            received: TimeRange {
                from: Some(9 * DAY_MS),
                to: Some(10 * DAY_MS),
            },
            ..Default::default()
        };
        let late_in_day = item().with_dates(10 * DAY_MS + DAY_MS - 1, 0);
        assert!(filter.matches(&late_in_day, 0));
        let next_day = item().with_dates(11 * DAY_MS, 0);
        assert!(!filter.matches(&next_day, 0));
    }

    #[test]
    fn test_instant_range_excludes_missing_timestamp() {
        let filter = ColumnFilter {
            start: TimeRange {
                from: Some(0),
                to: None,
            },
            ..Default::default()
        };
        assert!(!filter.matches(&item(), 0));

        let end_filter = ColumnFilter {
            end: TimeRange {
                from: None,
                to: Some(10 * DAY_MS + 5_000),
            },
            ..Default::default()
        };
        assert!(end_filter.matches(&item(), 0));
    }

    #[test]
    fn test_time_spent_bounds_in_seconds() {
        let within = ColumnFilter {
            time_min_secs: Some(60),
            time_max_secs: Some(90),
            ..Default::default()
        };
        assert!(within.matches(&item(), 0));

        let too_high = ColumnFilter {
            time_min_secs: Some(91),
            ..Default::default()
        };
        assert!(!too_high.matches(&item(), 0));
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let filter = ColumnFilter {
            received: TimeRange {
                from: None,
                to: Some(i64::MAX),
            },
            time_max_secs: Some(u64::MAX),
            ..Default::default()
        };
        assert!(filter.matches(&item(), 0));

        let unreachable = ColumnFilter {
            time_min_secs: Some(u64::MAX),
            ..Default::default()
        };
        assert!(!unreachable.matches(&item(), 0));
    }

    #[test]
    fn test_filter_deserializes_from_camel_case() {
        let filter: ColumnFilter =
            serde_json::from_str(r#"{"title":"late","timeMinSecs":5,"received":{"from":1}}"#).unwrap();
        assert_eq!(filter.title, "late");
        assert_eq!(filter.time_min_secs, Some(5));
        assert_eq!(filter.received.from, Some(1));
    }
}
