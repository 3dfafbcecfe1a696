//! List command - List items for a role view

use crate::cli::FilterArgs;
use crate::domain::total_spent;
use crate::errors::{CaseflowError, Result};
use crate::schemas::{Timestamp, WorkItem};
use crate::views::{self, format_date, format_duration, QuickFilter, Sort, SortDir, SortKey, View};

use super::{GlobalOptions, Workspace};

#[derive(Debug, Clone)]
pub struct ListArgs {
    pub view: String,
    pub quick: String,
    pub filter: FilterArgs,
    pub sort: Option<String>,
    pub desc: bool,
    pub json: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        ListArgs {
            view: "manager".to_string(),
            quick: "all".to_string(),
            filter: FilterArgs::default(),
            sort: None,
            desc: false,
            json: false,
        }
    }
}

/// List items with optional filtering
pub async fn run(opts: &GlobalOptions<'_>, args: &ListArgs) -> Result<()> {
    let view: View = args.view.parse()?;
    let quick: QuickFilter = args.quick.parse()?;
    let sort = args
        .sort
        .as_deref()
        .map(|key| key.parse::<SortKey>())
        .transpose()?
        .map(|key| Sort {
            key,
            dir: if args.desc { SortDir::Desc } else { SortDir::Asc },
        });
    let filter = args.filter.to_column_filter();

    let workspace = Workspace::open(opts)?;
    let items = workspace.service.list().await?;
    let now = workspace.service.now();

    let rows = match view {
        View::Manager => views::manager_rows(&items, &filter, quick, sort, now),
        View::Handler => views::handler_rows(&items, workspace.actor(opts), &filter, sort, now),
        View::Referral => views::referral_rows(&items, &filter, sort, now),
    };

    if args.json {
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| CaseflowError::wrap(e, "failed to serialize items"))?;
        println!("{}", out);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No items.");
        return Ok(());
    }
    for item in &rows {
        println!("{}", render_row(item, now));
    }
    tracing::debug!("{} of {} items shown", rows.len(), items.len());
    Ok(())
}

fn render_row(item: &WorkItem, now: Timestamp) -> String {
    format!(
        "{:<8} {:<30} {:<12} {:<12} {:<22} {:>12}",
        item.id,
        truncate(&item.title, 30),
        format_date(Some(item.received_date)),
        item.assignee.as_deref().unwrap_or("-"),
        item.status.label(),
        format_duration(total_spent(item, now)),
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
