//! Summary command - Status counts and totals

use crate::errors::{CaseflowError, Result};
use crate::views;

use super::{GlobalOptions, Workspace};

pub async fn run(opts: &GlobalOptions<'_>, json: bool) -> Result<()> {
    let workspace = Workspace::open(opts)?;
    let items = workspace.service.list().await?;
    let summary = views::summary(&items);

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| CaseflowError::wrap(e, "failed to serialize summary"))?;
        println!("{}", out);
        return Ok(());
    }

    for count in summary.counts.iter().filter(|c| c.count > 0) {
        println!("{:<24} {}", count.label, count.count);
    }
    println!(
        "Total {}  Pipeline {}  Completed {}",
        summary.totals.total, summary.totals.pipeline, summary.totals.completed
    );
    Ok(())
}
