//! Show command - Show details of a specific item

use crate::domain::{current_elapsed, total_spent};
use crate::errors::{CaseflowError, Result};
use crate::schemas::WorkItem;
use crate::views::{format_date, format_datetime, format_duration};

use super::{GlobalOptions, Workspace};

/// Show details of a specific item
pub async fn run(opts: &GlobalOptions<'_>, id: &str, json: bool) -> Result<()> {
    let workspace = Workspace::open(opts)?;
    let item = workspace.service.get(id).await?;

    if json {
        let out = serde_json::to_string_pretty(&item)
            .map_err(|e| CaseflowError::wrap(e, "failed to serialize item"))?;
        println!("{}", out);
        return Ok(());
    }

    print!("{}", render(&item, workspace.service.now()));
    Ok(())
}

fn render(item: &WorkItem, now: i64) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", item.id, item.title));
    out.push_str(&format!("  Status:    {} ({})\n", item.status.label(), item.status));
    out.push_str(&format!(
        "  Assignee:  {}\n",
        item.assignee.as_deref().unwrap_or("unassigned")
    ));
    out.push_str(&format!("  Received:  {}\n", format_date(Some(item.received_date))));
    out.push_str(&format!("  Logged:    {}\n", format_date(Some(item.logged_date))));
    out.push_str(&format!("  Started:   {}\n", format_datetime(item.start_time)));
    out.push_str(&format!("  Ended:     {}\n", format_datetime(item.end_time)));
    out.push_str(&format!("  Session:   {}\n", format_duration(current_elapsed(item, now))));
    out.push_str(&format!("  Spent:     {}\n", format_duration(total_spent(item, now))));

    if !item.comments.is_empty() {
        out.push_str("  Comments:\n");
        for comment in &item.comments {
            out.push_str(&format!(
                "    [{}] {}: {}\n",
                format_datetime(Some(comment.ts)),
                comment.author,
                comment.text
            ));
        }
    }
    out
}
